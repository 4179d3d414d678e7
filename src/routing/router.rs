//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Hold the fixed route table
//! - Pick the first route whose matcher accepts the request
//! - Run the handler and convert escaped errors into responses
//!
//! # Design Decisions
//! - Immutable after construction (shared across connections without locks)
//! - First match wins, no fallthrough
//! - Explicit 404 rather than a silent default

use std::sync::Arc;

use crate::error::Error;
use crate::handlers;
use crate::http::{encode_response, parse_request, Method, Request, Response, StatusCode};
use crate::routing::matcher::{
    AndMatcher, ExactPathMatcher, Matcher, MethodMatcher, PathPrefixMatcher, SegmentCountMatcher,
};
use crate::storage::FileStore;

/// What a matched route runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Echo,
    UserAgent,
    ReadFile,
    CreateFile,
}

/// A named route: conditions plus the endpoint they select.
#[derive(Debug)]
pub struct Route {
    pub name: &'static str,
    pub endpoint: Endpoint,
    matcher: AndMatcher,
}

impl Route {
    pub fn new(name: &'static str, endpoint: Endpoint, matcher: AndMatcher) -> Self {
        Self {
            name,
            endpoint,
            matcher,
        }
    }

    pub fn matches(&self, req: &Request) -> bool {
        self.matcher.matches(req)
    }
}

fn segment_route(
    name: &'static str,
    method: Method,
    prefix: &str,
    endpoint: Endpoint,
) -> Route {
    Route::new(
        name,
        endpoint,
        AndMatcher::new(vec![
            Box::new(MethodMatcher::new(method)),
            Box::new(PathPrefixMatcher::new(prefix)),
            Box::new(SegmentCountMatcher::new(3)),
        ]),
    )
}

/// Dispatches parsed requests to handlers.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Arc<Vec<Route>>,
    store: Arc<dyn FileStore>,
}

impl Router {
    /// Build the route table over the given file store.
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        let routes = vec![
            segment_route("echo", Method::Get, "/echo/", Endpoint::Echo),
            Route::new(
                "user-agent",
                Endpoint::UserAgent,
                AndMatcher::new(vec![
                    Box::new(MethodMatcher::new(Method::Get)),
                    Box::new(ExactPathMatcher::new("/user-agent")),
                ]),
            ),
            segment_route("files-get", Method::Get, "/files/", Endpoint::ReadFile),
            segment_route("files-post", Method::Post, "/files/", Endpoint::CreateFile),
        ];

        Self {
            routes: Arc::new(routes),
            store,
        }
    }

    /// Find the first route accepting this request.
    pub fn match_request(&self, req: &Request) -> Option<&Route> {
        self.routes.iter().find(|route| route.matches(req))
    }

    /// Route a parsed request. Unmatched requests get an empty 404.
    pub fn route(&self, req: &Request) -> Result<Response, Error> {
        let route = match self.match_request(req) {
            Some(route) => route,
            None => {
                tracing::debug!(method = %req.method(), path = %req.path(), "No route matched");
                return Ok(Response::builder(StatusCode::NOT_FOUND).content_length(0).build());
            }
        };

        tracing::debug!(route = route.name, path = %req.path(), "Route matched");

        // every route requires exactly 3 segments; the third is the argument
        let arg = req.path().split('/').nth(2).unwrap_or_default();
        match route.endpoint {
            Endpoint::Echo => Ok(handlers::echo(arg)),
            Endpoint::UserAgent => Ok(handlers::user_agent(req.headers())),
            Endpoint::ReadFile => handlers::read_file(self.store.as_ref(), arg),
            Endpoint::CreateFile => handlers::create_file(self.store.as_ref(), arg, req.body()),
        }
    }

    /// Parse, route and map failures: parse errors become 400, anything else 500.
    pub fn respond(&self, raw: &[u8]) -> Response {
        let result = parse_request(raw)
            .map_err(Error::from)
            .and_then(|req| self.route(&req));

        result.unwrap_or_else(|e| {
            match &e {
                Error::Parse(_) => tracing::debug!(error = %e, "Rejected malformed request"),
                Error::Io(_) => tracing::error!(error = %e, "Handler failed"),
            }
            e.into_response()
        })
    }

    /// The single entry point used by connections: request bytes in, response bytes out.
    pub fn handle(&self, raw: &[u8]) -> Vec<u8> {
        encode_response(&self.respond(raw))
    }
}
