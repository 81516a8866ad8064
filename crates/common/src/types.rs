use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a running service process, reported by `/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
}

impl ServiceInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            instance_id: Uuid::new_v4(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_ids_differ_per_process_handle() {
        let a = ServiceInfo::new("veracity-api");
        let b = ServiceInfo::new("veracity-api");
        assert_eq!(a.name, "veracity-api");
        assert_eq!(a.version, env!("CARGO_PKG_VERSION"));
        assert_ne!(a.instance_id, b.instance_id);
    }
}
