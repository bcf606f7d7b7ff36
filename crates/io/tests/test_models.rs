use rand::rngs::StdRng;
use rand::SeedableRng;
use test_case::test_case;

use dfarust_algebra::intersection;
use dfarust_algebra::is_equivalent;
use dfarust_algebra::minimize;
use dfarust_automaton::random_dfa;
use dfarust_automaton::Alphabet;
use dfarust_automaton::Dfa;
use dfarust_automaton::DfaError;
use dfarust_io::dump;
use dfarust_io::io_json::read_json;
use dfarust_io::io_json::write_json;
use dfarust_io::load;
use dfarust_io::IOError;
use dfarust_utilities::words_up_to;

fn assert_same_language(left: &Dfa, right: &Dfa, max_length: usize) {
    for word in words_up_to(left.alphabet().as_slice(), max_length) {
        assert_eq!(left.accepts(&word), right.accepts(&word), "Mismatch on word {word:?}");
    }
}

#[test_case(include_str!("../../../models/even_ones.json") ; "even_ones.json")]
#[test_case(include_str!("../../../models/contains_00.json") ; "contains_00.json")]
#[test_case(include_str!("../../../models/ends_in_zero.json") ; "ends_in_zero.json")]
#[test_case(include_str!("../../../models/even_length.json") ; "even_length.json")]
#[test_case(include_str!("../../../models/seven_states.json") ; "seven_states.json")]
fn test_json_round_trip(input: &str) {
    let _ = env_logger::builder().is_test(true).try_init();

    let dfa = read_json(input.as_bytes()).unwrap();

    let mut output = Vec::new();
    write_json(&mut output, &dfa).unwrap();
    let loaded = read_json(output.as_slice()).unwrap();

    assert_same_language(&dfa, &loaded, 4);
    assert_eq!(dump(&loaded), dump(&dfa));
}

#[test_case(include_str!("../../../models/even_ones.json") ; "even_ones.json")]
#[test_case(include_str!("../../../models/contains_00.json") ; "contains_00.json")]
#[test_case(include_str!("../../../models/seven_states.json") ; "seven_states.json")]
fn test_minimize_round_trip(input: &str) {
    let _ = env_logger::builder().is_test(true).try_init();

    let dfa = read_json(input.as_bytes()).unwrap();
    let minimal = minimize(&dfa);
    let loaded = load(&dump(&minimal)).unwrap();

    assert_same_language(&dfa, &loaded, 6);
    assert_eq!(is_equivalent(&dfa, &loaded), Ok(true));
}

#[test]
fn test_random_round_trip() {
    let mut rng = StdRng::seed_from_u64(2024);
    let alphabet = Alphabet::from("xyz");

    for _ in 0..10 {
        let dfa = random_dfa(&mut rng, 8, &alphabet, 0.5);
        let loaded = load(&dump(&dfa)).unwrap();

        assert_same_language(&dfa, &loaded, 4);
    }
}

#[test]
fn test_run_even_ones() {
    let dfa = read_json(include_str!("../../../models/even_ones.json").as_bytes()).unwrap();

    assert_eq!(dfa.run("010101".chars()), Ok(false));
    assert_eq!(dfa.run("".chars()), Ok(true));
}

#[test]
fn test_intersection_of_models() {
    let ends_in_zero = read_json(include_str!("../../../models/ends_in_zero.json").as_bytes()).unwrap();
    let even_length = read_json(include_str!("../../../models/even_length.json").as_bytes()).unwrap();

    let product = intersection(&ends_in_zero, &even_length).unwrap();

    assert_eq!(product.accepts("00"), Ok(true));
    assert_eq!(product.accepts("10"), Ok(true));
    assert_eq!(product.accepts("0"), Ok(false));
}

#[test]
fn test_intersection_alphabet_mismatch() {
    let binary = read_json(include_str!("../../../models/even_ones.json").as_bytes()).unwrap();
    let letters = read_json(include_str!("../../../models/seven_states.json").as_bytes()).unwrap();

    assert_eq!(letters.alphabet(), &Alphabet::from("ab"));
    assert!(matches!(
        intersection(&binary, &letters),
        Err(DfaError::AlphabetMismatch { .. })
    ));
}

#[test_case(r#"{"start": "s0", "states": [{"name": "s0", "accepting": true}], "alphabet": ["0"],
    "transitions": [{"from": "s0", "symbol": "0", "to": "s1"}]}"# ; "dangling target")]
#[test_case(r#"{"start": "s1", "states": [{"name": "s0", "accepting": true}], "alphabet": ["0"],
    "transitions": [{"from": "s0", "symbol": "0", "to": "s0"}]}"# ; "unknown start")]
#[test_case(r#"{"start": "s0", "states": [{"name": "s0", "accepting": true}], "alphabet": ["0"]}"# ; "missing transitions field")]
#[test_case(r#"{"start": "s0", "states": [], "alphabet": ["0"], "transitions": []}"# ; "no states")]
#[test_case(r#"{"start": "s0", "states": [{"name": "s0", "accepting": true}], "alphabet": [],
    "transitions": []}"# ; "empty alphabet")]
fn test_malformed_documents(input: &str) {
    assert!(matches!(
        read_json(input.as_bytes()),
        Err(IOError::Automaton(DfaError::MalformedDocument(_)))
    ));
}

#[test]
fn test_non_deterministic_document() {
    let input = r#"{"start": "s0", "states": [{"name": "s0", "accepting": true}, {"name": "s1", "accepting": false}],
        "alphabet": ["0"],
        "transitions": [
            {"from": "s0", "symbol": "0", "to": "s0"},
            {"from": "s0", "symbol": "0", "to": "s1"},
            {"from": "s1", "symbol": "0", "to": "s1"}
        ]}"#;

    assert!(matches!(
        read_json(input.as_bytes()),
        Err(IOError::Automaton(DfaError::NonDeterministic { .. }))
    ));
}

#[test]
fn test_incomplete_document() {
    let input = r#"{"start": "s0", "states": [{"name": "s0", "accepting": true}, {"name": "s1", "accepting": false}],
        "alphabet": ["0", "1"],
        "transitions": [
            {"from": "s0", "symbol": "0", "to": "s1"},
            {"from": "s0", "symbol": "1", "to": "s0"},
            {"from": "s1", "symbol": "0", "to": "s1"}
        ]}"#;

    assert!(matches!(
        read_json(input.as_bytes()),
        Err(IOError::Automaton(DfaError::Incomplete { .. }))
    ));
}
