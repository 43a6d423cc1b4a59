//! Route → slide mapping, fixed at startup.

use std::sync::Arc;

use vizdeck_common::ContentNode;

use crate::error::RegistryError;

#[derive(Debug, Clone)]
pub struct ViewRegistry {
    default: Arc<ContentNode>,
    routes: Vec<(String, Arc<ContentNode>)>,
}

impl ViewRegistry {
    pub fn new(default: ContentNode) -> Self {
        Self { default: Arc::new(default), routes: Vec::new() }
    }

    /// Register a slide. Routes are kept in registration order.
    pub fn register(&mut self, route: &str, view: ContentNode) -> Result<(), RegistryError> {
        if self.routes.iter().any(|(r, _)| r == route) {
            return Err(RegistryError::DuplicateRoute(route.to_string()));
        }
        self.routes.push((route.to_string(), Arc::new(view)));
        Ok(())
    }

    pub fn with(mut self, route: &str, view: ContentNode) -> Result<Self, RegistryError> {
        self.register(route, view)?;
        Ok(self)
    }

    pub fn get(&self, route: &str) -> Option<&Arc<ContentNode>> {
        self.routes.iter().find(|(r, _)| r == route).map(|(_, v)| v)
    }

    pub fn default_view(&self) -> &Arc<ContentNode> {
        &self.default
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(r, _)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_route_is_rejected() {
        let mut registry = ViewRegistry::new(ContentNode::h1("title"));
        registry.register("/merit", ContentNode::h1("merit")).unwrap();
        assert_eq!(
            registry.register("/merit", ContentNode::h1("again")),
            Err(RegistryError::DuplicateRoute("/merit".into()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_routes_keep_registration_order() {
        let registry = ViewRegistry::new(ContentNode::h1("title"))
            .with("/b", ContentNode::h1("b"))
            .and_then(|r| r.with("/a", ContentNode::h1("a")))
            .unwrap();
        assert_eq!(registry.routes().collect::<Vec<_>>(), vec!["/b", "/a"]);
    }
}
