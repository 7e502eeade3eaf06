use indexmap::IndexSet;
use serde::Serialize;
use store::{City, RouteMap, RouteMapStats, SearchStrategy};

#[derive(Debug, Serialize)]
struct CityView<'a> {
    id: &'a str,
    label: &'a str,
}

impl<'a> From<&'a City> for CityView<'a> {
    fn from(city: &'a City) -> Self {
        Self {
            id: &city.id,
            label: &city.label,
        }
    }
}

#[derive(Debug, Serialize)]
struct RouteView<'a> {
    from: &'a str,
    to: &'a str,
    strategy: SearchStrategy,
    found: bool,
    stops: Vec<CityView<'a>>,
    unserved: Vec<&'a str>,
}

/// One `Name (ID)` line per city.
pub fn city_list(map: &RouteMap) -> String {
    map.cities()
        .map(|city| city.display_name())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn unserved_notice(unserved: &IndexSet<String>) -> Option<String> {
    if unserved.is_empty() {
        return None;
    }
    let ids: Vec<&str> = unserved.iter().map(|s| s.as_str()).collect();
    Some(format!(
        "The following airports are not being served at this time: {}",
        ids.join(", ")
    ))
}

/// `Name (ID) -> Name (ID) -> ...`
pub fn route(map: &RouteMap, path: &[String]) -> String {
    path.iter()
        .map(|id| match map.city(id) {
            Some(city) => city.display_name(),
            None => id.clone(),
        })
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn route_not_found(map: &RouteMap, from: &str, to: &str) -> String {
    if !map.contains(from) {
        format!("Airport {} is not served", from)
    } else if !map.contains(to) {
        format!("Airport {} is not served", to)
    } else {
        format!("No route found from {} to {}", from, to)
    }
}

pub fn stats(stats: &RouteMapStats) -> String {
    format!(
        "Route Map Statistics:\n  Cities: {}\n  Connections: {}\n  Unserved airports: {}\n  Connected groups: {}",
        stats.city_count, stats.connection_count, stats.unserved_count, stats.component_count
    )
}

pub fn city_list_json(map: &RouteMap) -> serde_json::Result<String> {
    let cities: Vec<CityView> = map.cities().map(CityView::from).collect();
    serde_json::to_string_pretty(&cities)
}

pub fn route_json(
    map: &RouteMap,
    from: &str,
    to: &str,
    strategy: SearchStrategy,
    path: Option<&[String]>,
) -> serde_json::Result<String> {
    let view = RouteView {
        from,
        to,
        strategy,
        found: path.is_some(),
        stops: path
            .unwrap_or_default()
            .iter()
            .filter_map(|id| map.city(id))
            .map(CityView::from)
            .collect(),
        unserved: map.unserved().iter().map(|s| s.as_str()).collect(),
    };
    serde_json::to_string_pretty(&view)
}

pub fn stats_json(stats: &RouteMapStats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stats)
}
