use gpui::{ElementId, SharedString};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ComponentId(SharedString);

impl ComponentId {
    /// Id unique to one widget instance, e.g. `search-box-7` for entity 7.
    pub fn numbered(prefix: &str, instance: u64) -> Self {
        Self(format!("{prefix}-{instance}").into())
    }

    pub fn slot(&self, name: &str) -> ElementId {
        ElementId::Name(format!("{}::{name}", self.0).into())
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self(SharedString::from(value.to_string()))
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<ComponentId> for ElementId {
    fn from(value: ComponentId) -> Self {
        ElementId::Name(value.0)
    }
}
