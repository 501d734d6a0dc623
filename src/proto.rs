use serde::{Deserialize, Serialize};

/// One command for the store, as read by batch mode.
///
/// Encoded as a JSON object tagged by `cmd`, e.g.
/// `{"cmd":"set","key":"k","value":"v"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    Get { key: String },
    Set { key: String, value: String },
    Rm { key: String },
}

/// Outcome of a [`Request`], tagged by `status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Ok,
    Found { value: String },
    NotFound,
    Error { message: String },
}

impl Request {
    pub fn key(&self) -> &str {
        match self {
            Request::Get { key } | Request::Set { key, .. } | Request::Rm { key } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_format() {
        let req: Request = serde_json::from_str(r#"{"cmd":"set","key":"k","value":"v"}"#).unwrap();
        assert_eq!(
            req,
            Request::Set {
                key: "k".to_owned(),
                value: "v".to_owned()
            }
        );

        let req: Request = serde_json::from_str(r#"{"cmd":"rm","key":"k"}"#).unwrap();
        assert_eq!(req.key(), "k");

        assert!(serde_json::from_str::<Request>(r#"{"cmd":"drop","key":"k"}"#).is_err());
        assert!(serde_json::from_str::<Request>(r#"{"cmd":"set","key":"k"}"#).is_err());
    }

    #[test]
    fn response_wire_format() {
        assert_eq!(
            serde_json::to_string(&Response::NotFound).unwrap(),
            r#"{"status":"not_found"}"#
        );
        assert_eq!(
            serde_json::to_string(&Response::Found {
                value: String::new()
            })
            .unwrap(),
            r#"{"status":"found","value":""}"#
        );
    }
}
