use crate::error::{CatalogError, Result};

pub const SECRET_KEY: &str = "APP_PASSWORD";

/// Single shared-secret check in front of the catalog.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: String,
}

impl AccessGate {
    pub fn new(secret: Option<String>) -> Result<Self> {
        match secret {
            Some(secret) if !secret.is_empty() => Ok(AccessGate { secret }),
            _ => Err(CatalogError::SecretMissing(SECRET_KEY)),
        }
    }

    /// Plain equality; an empty input never unlocks.
    pub fn check(&self, input: &str) -> Result<()> {
        if input.is_empty() || input != self.secret {
            return Err(CatalogError::AccessDenied);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_secret_is_fatal() {
        assert!(matches!(AccessGate::new(None), Err(CatalogError::SecretMissing(SECRET_KEY))));
        assert!(matches!(
            AccessGate::new(Some(String::new())),
            Err(CatalogError::SecretMissing(_))
        ));
    }

    #[test]
    fn only_exact_match_unlocks() {
        let gate = AccessGate::new(Some("hunter2".to_string())).unwrap();
        assert!(gate.check("hunter2").is_ok());
        assert!(matches!(gate.check(""), Err(CatalogError::AccessDenied)));
        assert!(matches!(gate.check("Hunter2"), Err(CatalogError::AccessDenied)));
        assert!(matches!(gate.check("hunter2 "), Err(CatalogError::AccessDenied)));
    }
}
