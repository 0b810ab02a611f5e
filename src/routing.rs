//! Hash routing: fragment parsing and page dispatch.
//!
//! The whole site lives behind the `#/...` fragment so deep links survive a
//! static host. The parser is total: any malformed fragment degrades to the
//! home route.

use std::collections::BTreeMap;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::catalog;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Route {
    /// First non-empty path segment; empty string means home.
    pub page: String,
    /// Remaining non-empty path segments, in order.
    pub params: Vec<String>,
    /// Query pairs after the first `?`, last value wins per key.
    pub query: BTreeMap<String, String>,
}

/// Parse a location fragment like `#/pay/growth?rush=1` into a [`Route`].
pub fn parse_route(fragment: &str) -> Route {
    let clean = fragment.strip_prefix('#').unwrap_or(fragment);
    let clean = clean.strip_prefix('/').unwrap_or(clean);
    let (path_part, query_part) = match clean.split_once('?') {
        Some((path, query)) => (path, query),
        None => (clean, ""),
    };

    let mut segments = path_part
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let page = segments.next().unwrap_or_default();
    let params = segments.collect();

    Route {
        page,
        params,
        query: parse_query(query_part),
    }
}

fn parse_query(raw: &str) -> BTreeMap<String, String> {
    let mut query = BTreeMap::new();
    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key);
        if key.is_empty() {
            continue;
        }
        query.insert(key, decode_component(value));
    }
    query
}

fn decode_component(raw: &str) -> String {
    // URLSearchParams semantics: '+' is a space, then percent-decode.
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(|c| c.into_owned());
    decoded.unwrap_or(spaced)
}

/// The closed set of pages the dispatcher can land on.
#[derive(Clone, PartialEq, Debug)]
pub enum Page {
    Home,
    WhyUs,
    Projects,
    Brief { slug: String },
    Pay { slug: String, rush: bool },
    ThankYou { session_id: Option<String> },
    Privacy,
    TechTerms,
    NotFound,
}

/// Map a parsed route onto a page. Pure and total; anything unknown, and any
/// brief/pay route whose slug does not resolve in the catalog, lands on
/// [`Page::NotFound`].
pub fn dispatch(route: &Route) -> Page {
    match route.page.as_str() {
        "" => Page::Home,
        "why-us" => Page::WhyUs,
        "projects" => Page::Projects,
        "brief" => match route.params.first().and_then(|s| catalog::lookup(s)) {
            Some(pkg) => Page::Brief {
                slug: pkg.slug.to_string(),
            },
            None => Page::NotFound,
        },
        "pay" => match route.params.first().and_then(|s| catalog::lookup(s)) {
            Some(pkg) => Page::Pay {
                slug: pkg.slug.to_string(),
                rush: route.query.get("rush").map(String::as_str) == Some("1"),
            },
            None => Page::NotFound,
        },
        "thank-you" => Page::ThankYou {
            session_id: route.query.get("session_id").cloned(),
        },
        "privacy" => Page::Privacy,
        "tech-terms" => Page::TechTerms,
        _ => Page::NotFound,
    }
}

pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Subscribe to location changes and re-parse synchronously. The listener is
/// removed again when the owning component unmounts.
#[hook]
pub fn use_hash_route() -> Route {
    let route = use_state(|| parse_route(&current_hash()));
    {
        let route = route.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let listener = Closure::wrap(Box::new(move || {
                    route.set(parse_route(&current_hash()));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "hashchange",
                        listener.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "hashchange",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }
    (*route).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_bare_marker_both_mean_home() {
        for fragment in ["", "#", "#/", "/"] {
            let route = parse_route(fragment);
            assert_eq!(route.page, "");
            assert!(route.params.is_empty());
            assert!(route.query.is_empty());
            assert_eq!(dispatch(&route), Page::Home);
        }
    }

    #[test]
    fn path_segments_split_into_page_and_params() {
        let route = parse_route("#/brief/growth");
        assert_eq!(route.page, "brief");
        assert_eq!(route.params, vec!["growth".to_string()]);

        // duplicate separators collapse
        let route = parse_route("#//pay//scale//");
        assert_eq!(route.page, "pay");
        assert_eq!(route.params, vec!["scale".to_string()]);
    }

    #[test]
    fn query_is_decoded_with_last_value_winning() {
        let route = parse_route("#/thank-you?session_id=cs_a%2Fb&x=1&x=2&note=a+b");
        assert_eq!(route.query.get("session_id").unwrap(), "cs_a/b");
        assert_eq!(route.query.get("x").unwrap(), "2");
        assert_eq!(route.query.get("note").unwrap(), "a b");
    }

    #[test]
    fn dispatch_matches_the_fixed_page_set() {
        assert_eq!(dispatch(&parse_route("#/why-us")), Page::WhyUs);
        assert_eq!(dispatch(&parse_route("#/projects")), Page::Projects);
        assert_eq!(dispatch(&parse_route("#/privacy")), Page::Privacy);
        assert_eq!(dispatch(&parse_route("#/tech-terms")), Page::TechTerms);
        assert_eq!(dispatch(&parse_route("#/nope")), Page::NotFound);
    }

    #[test]
    fn brief_requires_a_known_slug() {
        assert_eq!(
            dispatch(&parse_route("#/brief/growth")),
            Page::Brief {
                slug: "growth".into()
            }
        );
        assert_eq!(dispatch(&parse_route("#/brief/unknown")), Page::NotFound);
        assert_eq!(dispatch(&parse_route("#/brief")), Page::NotFound);
    }

    #[test]
    fn pay_seeds_rush_from_the_query() {
        assert_eq!(
            dispatch(&parse_route("#/pay/starter?rush=1")),
            Page::Pay {
                slug: "starter".into(),
                rush: true
            }
        );
        assert_eq!(
            dispatch(&parse_route("#/pay/starter?rush=0")),
            Page::Pay {
                slug: "starter".into(),
                rush: false
            }
        );
        assert_eq!(
            dispatch(&parse_route("#/pay/starter")),
            Page::Pay {
                slug: "starter".into(),
                rush: false
            }
        );
    }

    #[test]
    fn thank_you_carries_the_optional_session_id() {
        assert_eq!(
            dispatch(&parse_route("#/thank-you?session_id=cs_123")),
            Page::ThankYou {
                session_id: Some("cs_123".into())
            }
        );
        assert_eq!(
            dispatch(&parse_route("#/thank-you")),
            Page::ThankYou { session_id: None }
        );
    }
}
