//! Route resolution and the routing cell.

use std::sync::Arc;

use vizdeck_common::ContentNode;

use crate::cell::{Args, Cell, CellSpec, Outcome};
use crate::error::CellError;
use crate::views::ViewRegistry;

#[derive(Debug, Clone)]
pub struct Router {
    views: Arc<ViewRegistry>,
}

impl Router {
    pub fn new(views: ViewRegistry) -> Self {
        Self { views: Arc::new(views) }
    }

    /// The slide for `route`, or the default slide. Never fails.
    pub fn resolve(&self, route: Option<&str>) -> Arc<ContentNode> {
        route
            .and_then(|r| self.views.get(r))
            .unwrap_or_else(|| self.views.default_view())
            .clone()
    }

    /// The route key a pathname resolves to; unknown paths map to `None`.
    pub fn route_key(&self, route: Option<&str>) -> Option<String> {
        route.filter(|r| self.views.get(r).is_some()).map(str::to_string)
    }

    pub fn views(&self) -> &ViewRegistry {
        &self.views
    }

    pub fn cell(&self) -> RouterCell {
        RouterCell { router: self.clone() }
    }
}

/// `url.pathname` → `contents.children`.
pub struct RouterCell {
    router: Router,
}

impl Cell for RouterCell {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("router").input("url", "pathname").output("contents", "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let view = self.router.resolve(args.str("url", "pathname"));
        Ok(Outcome::emit(vec![serde_json::to_value(view.as_ref())?]))
    }
}
