use crate::erx::{amp, Erx, ResultE};
use serde::{Deserialize, Serialize};

/// Tag metadata consumed by the schema generator, one entry per tag group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagMeta {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TagMeta {
    pub fn new(name: &str) -> Self {
        TagMeta { name: name.to_string(), description: None }
    }

    pub fn described(name: &str, description: &str) -> Self {
        TagMeta { name: name.to_string(), description: Some(description.to_string()) }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An alternative server the documented api is reachable on.
/// The url must parse as an absolute url.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub url: url::Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Server {
    pub fn new(server_url: &str, description: Option<&str>) -> ResultE<Server> {
        let url = url::Url::parse(server_url).map_err(amp("server url"))?;
        Ok(Server { url, description: description.map(|d| d.to_string()) })
    }
}

/// Closed set of the extra application options the documentation
/// collaborators recognize. The reference implementation carried these in an
/// open keyword bag, here every recognized option is an explicit field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,
}

impl Descriptor {
    pub fn add_server(&mut self, server_url: &str, description: Option<&str>) -> Result<&mut Self, Erx> {
        self.servers.push(Server::new(server_url, description)?);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_url_must_be_absolute() {
        assert!(Server::new("https://api.example.com", Some("prod")).is_ok());
        assert!(Server::new("/relative", None).is_err());
    }

    #[test]
    fn descriptor_serializes_sparse() {
        let d = Descriptor::default();
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v, serde_json::json!({}));
    }
}
