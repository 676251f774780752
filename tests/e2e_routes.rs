//! End-to-end tests for shortest-route enumeration.
//!
//! Routes come back in exploration order, so every comparison is set-based.
//! Each scenario runs under both route strategies.

use friend_bloom::{EngineConfig, Error, Network, PersonId, PersonRecord, Route, RouteStrategy};
use hashbrown::HashSet;
use pretty_assertions::assert_eq;

const STRATEGIES: [RouteStrategy; 2] = [RouteStrategy::Backtracking, RouteStrategy::DistancePruned];

// ============================================================================
// Helpers
// ============================================================================

fn network(adjacency: &[(&str, &[&str])], strategy: RouteStrategy) -> Network {
    let records = adjacency
        .iter()
        .map(|(id, conns)| PersonRecord::new(*id, *id, conns.iter().copied()));
    Network::from_records(records, EngineConfig::default().with_route_strategy(strategy)).unwrap()
}

fn id(s: &str) -> PersonId {
    PersonId::from(s)
}

fn route_set(routes: &[Route]) -> HashSet<String> {
    routes.iter().map(Route::to_string).collect()
}

fn expected(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

const CHAIN: &[(&str, &[&str])] = &[("A", &["B"]), ("B", &["A", "C"]), ("C", &["B", "D"]), ("D", &["C"])];
const SPLIT: &[(&str, &[&str])] = &[("A", &["B"]), ("B", &["A"]), ("C", &["D"]), ("D", &["C"])];
const DIAMOND: &[(&str, &[&str])] = &[("A", &["B", "C"]), ("B", &["A", "D"]), ("C", &["A", "D"]), ("D", &["B", "C"])];

// ============================================================================
// 1. Chain: exactly one route
// ============================================================================

#[test]
fn test_chain_single_route() {
    for strategy in STRATEGIES {
        let mut net = network(CHAIN, strategy);
        net.sign_in(&id("A")).unwrap();
        let routes = net.routes_to(&id("D")).unwrap();

        assert_eq!(routes.len(), 1, "{strategy:?}");
        let people: Vec<&str> = routes[0].people().iter().map(PersonId::as_str).collect();
        assert_eq!(people, vec!["A", "B", "C", "D"]);
        assert_eq!(routes[0].len(), 3);
    }
}

// ============================================================================
// 2. Disconnected target: empty, not an error
// ============================================================================

#[test]
fn test_unreachable_target_is_empty() {
    for strategy in STRATEGIES {
        let mut net = network(SPLIT, strategy);
        net.sign_in(&id("A")).unwrap();
        assert!(net.routes_to(&id("C")).unwrap().is_empty());
    }
}

// ============================================================================
// 3. Diamond: both routes
// ============================================================================

#[test]
fn test_diamond_two_routes() {
    for strategy in STRATEGIES {
        let mut net = network(DIAMOND, strategy);
        net.sign_in(&id("A")).unwrap();
        let routes = net.routes_to(&id("D")).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(route_set(&routes), expected(&["A -> B -> D", "A -> C -> D"]));
    }
}

// ============================================================================
// 4. Home and unknown targets
// ============================================================================

#[test]
fn test_route_to_home_is_empty() {
    let mut net = network(DIAMOND, RouteStrategy::Backtracking);
    net.sign_in(&id("A")).unwrap();
    assert!(net.routes_to(&id("A")).unwrap().is_empty());
}

#[test]
fn test_route_to_unknown_person_fails() {
    let mut net = network(DIAMOND, RouteStrategy::Backtracking);
    net.sign_in(&id("A")).unwrap();
    assert!(matches!(net.routes_to(&id("Z")), Err(Error::UnknownPerson(p)) if p == id("Z")));
}

#[test]
fn test_routes_require_session() {
    let net = network(DIAMOND, RouteStrategy::Backtracking);
    assert!(matches!(net.routes_to(&id("D")), Err(Error::NoSession)));
}

// ============================================================================
// 5. Sample data: three routes through the middle of the graph
// ============================================================================

#[test]
fn test_sample_data_routes() {
    for strategy in STRATEGIES {
        let config = EngineConfig::default().with_route_strategy(strategy);
        let mut net = Network::from_json_str(include_str!("../data/people.json"), config).unwrap();
        net.sign_in(&id("1")).unwrap();

        let to_frank = net.routes_to(&id("6")).unwrap();
        assert_eq!(
            route_set(&to_frank),
            expected(&["1 -> 2 -> 4 -> 6", "1 -> 3 -> 4 -> 6", "1 -> 3 -> 5 -> 6"])
        );

        let to_grace = net.routes_to(&id("7")).unwrap();
        assert_eq!(to_grace.len(), 3);
        assert!(to_grace.iter().all(|r| r.len() == 4 && r.end() == Some(&id("7"))));

        // Heidi is five hops out: residual, so no routes.
        assert!(net.routes_to(&id("8")).unwrap().is_empty());
    }
}

// ============================================================================
// 6. Routes follow mutations
// ============================================================================

#[test]
fn test_shortcut_replaces_routes() {
    let mut net = network(CHAIN, RouteStrategy::Backtracking);
    net.sign_in(&id("A")).unwrap();
    assert_eq!(net.routes_to(&id("D")).unwrap().len(), 1);

    net.connect(&id("B"), &id("D")).unwrap();
    let routes = net.routes_to(&id("D")).unwrap();
    assert_eq!(route_set(&routes), expected(&["A -> B -> D"]));
    assert_eq!(net.tiers().unwrap().tier_of(&id("D")), Some(2));
}
