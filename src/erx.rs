/// Layouted: predefined Layout quick methods
/// ResultE<T> = Result<T, Erx>;
/// ResultEX = ResultE<()>;
/// fn smp<T: ToString>(error: T) -> Erx
/// fn amp<T: ToString>(additional: &str) -> impl Fn(T) -> Erx
use crate::conf;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

lazy_static! {
    static ref APP_SHORT: String = conf::gantry().read().expect("failed read gantry object").short.clone();
}

/// Zero
pub static LAYOUTED_C_ZERO: &'static str = "0000";

/// ResultE<T> = Result<T, Erx>;
pub type ResultE<T> = Result<T, Erx>;

/// ResultEX = ResultE<()>;
pub type ResultEX = ResultE<()>;

/// Layouted: Some predefined Layouted methods
pub struct Layouted;

pub fn describe_error(e: &dyn std::error::Error) -> String {
    let mut description = e.to_string();
    let mut current = e.source();
    while let Some(source) = current {
        description.push_str(&format!("\nCaused by: {}", source));
        current = source.source();
    }
    description
}

/// smp: simple convert T: ToString to Erx
pub fn smp<T: ToString>(error: T) -> Erx {
    Erx { code: Default::default(), message: error.to_string() }
}

/// amp: return a function that convert T: ToString to Erx,
/// prepending additional context to the message
pub fn amp<T: ToString>(additional: &str) -> impl Fn(T) -> Erx {
    let additional = additional.to_string();
    move |err: T| Erx { code: Default::default(), message: format!("{} : {}", additional, err.to_string()) }
}

/// Predefined Layouted Code with length 4
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreL4 {
    /// Common: generic error
    COMM,
    /// Application: application object error
    APPC,
    /// Routing: route table error
    ROUT,
    /// Configure: configuration error
    CONF,
    /// Undefined
    UNDF,
    ///
    OTHE,
}

impl PreL4 {
    pub fn four(&self) -> &'static str {
        match self {
            PreL4::COMM => "COMM",
            PreL4::APPC => "APPC",
            PreL4::ROUT => "ROUT",
            PreL4::CONF => "CONF",
            PreL4::UNDF => "UNDF",
            PreL4::OTHE => "OTHE",
        }
    }

    pub fn from_str(s: &str) -> Option<PreL4> {
        match s.to_uppercase().as_str() {
            "COMM" => Some(PreL4::COMM),
            "APPC" => Some(PreL4::APPC),
            "ROUT" => Some(PreL4::ROUT),
            "CONF" => Some(PreL4::CONF),
            "UNDF" => Some(PreL4::UNDF),
            "OTHE" => Some(PreL4::OTHE),
            _ => None,
        }
    }

    pub fn layoutc(&self, category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(self.four(), category, detail)
    }
}

impl Display for PreL4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.four())
    }
}

impl From<PreL4> for String {
    fn from(value: PreL4) -> Self {
        value.four().to_string()
    }
}

impl Layouted {
    /// common: generic error
    pub fn common(category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(PreL4::COMM.four(), category, detail)
    }

    /// application: application object error
    pub fn application(category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(PreL4::APPC.four(), category, detail)
    }

    /// routing: route table error
    pub fn routing(category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(PreL4::ROUT.four(), category, detail)
    }

    /// configure: configuration error
    pub fn configure(category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(PreL4::CONF.four(), category, detail)
    }
}

/// malformed route path or inclusion prefix
pub fn invalid_path(path: &str) -> Erx {
    Erx::with_code(Layouted::routing("PATH", "0001"), &format!("invalid path: {}", path))
}

/// method set explicitly passed as empty
pub fn empty_methods(path: &str) -> Erx {
    Erx::with_code(Layouted::routing("METH", "0001"), &format!("empty method set for path: {}", path))
}

/// Code format
/// aaaa-xxxx-yyyy-zzzz
///
///    aaaa : application mark, 4 chars
///    xxxx : functional domain, 4 chars
///    yyyy : sub category, 4 chars
///    zzzz : concrete error, 4 chars
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LayoutedC {
    pub application: String,
    pub domain: String,
    pub category: String,
    pub detail: String,
}

impl LayoutedC {
    pub fn okay() -> LayoutedC {
        LayoutedC {
            application: APP_SHORT.clone(),
            domain: LAYOUTED_C_ZERO.into(),
            category: LAYOUTED_C_ZERO.into(),
            detail: LAYOUTED_C_ZERO.into(),
        }
    }

    pub fn new(domain: &str, category: &str, detail: &str) -> LayoutedC {
        LayoutedC { application: APP_SHORT.clone(), domain: domain.into(), category: category.into(), detail: detail.into() }
    }

    pub fn is_okc(&self) -> bool {
        self.domain.replace("0", "").len() == 0 && self.category.replace("0", "").len() == 0 && self.detail.replace("0", "").len() == 0
    }

    pub fn layout_string(&self) -> String {
        format!("{}-{}-{}-{}", self.application, self.domain, self.category, self.detail)
    }
}

impl Default for LayoutedC {
    fn default() -> Self {
        LayoutedC { application: APP_SHORT.clone(), domain: PreL4::UNDF.into(), category: PreL4::UNDF.into(), detail: PreL4::UNDF.into() }
    }
}

impl From<LayoutedC> for String {
    fn from(value: LayoutedC) -> Self {
        value.layout_string()
    }
}

impl From<String> for LayoutedC {
    fn from(value: String) -> Self {
        let mut c = LayoutedC::default();
        let parts: Vec<&str> = value.split("-").collect();
        if let Some(application) = parts.get(0) {
            c.application = application.to_string();
        }
        if let Some(domain) = parts.get(1) {
            c.domain = domain.to_string();
        }
        if let Some(category) = parts.get(2) {
            c.category = category.to_string();
        }
        if let Some(detail) = parts.get(3) {
            c.detail = detail.to_string();
        }
        c
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Erx {
    code: LayoutedC,
    message: String,
}

impl Erx {
    pub fn new(message: &str) -> Erx {
        Erx { code: Default::default(), message: message.to_string() }
    }

    pub fn with_code(code: LayoutedC, message: &str) -> Erx {
        Erx { code, message: message.to_string() }
    }

    pub fn code(&self) -> LayoutedC {
        self.code.clone()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> String {
        let mut description = self.code.layout_string();
        description.push_str(" ");
        description.push_str(&self.message);
        description
    }
}

impl Display for Erx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_json::to_string(&self).unwrap_or_default())
    }
}

impl Default for Erx {
    fn default() -> Self {
        Erx { code: Default::default(), message: Default::default() }
    }
}

impl From<&str> for Erx {
    fn from(s: &str) -> Self {
        Erx::new(s)
    }
}

impl From<String> for Erx {
    fn from(str: String) -> Erx {
        if str.is_empty() {
            return Erx::default();
        }

        serde_json::from_str(&str).unwrap_or_else(|_| Erx::new(&str))
    }
}

impl From<Box<dyn std::error::Error>> for Erx {
    fn from(value: Box<dyn std::error::Error>) -> Self {
        Erx::new(&value.to_string())
    }
}
