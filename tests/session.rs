//! End-to-end tests through the public API

use wordle_advisor::core::{Observation, Pattern, Word};
use wordle_advisor::error::SolverError;
use wordle_advisor::solver::entropy::calculate_metrics;
use wordle_advisor::solver::{Mode, Session, SessionConfig};
use wordle_advisor::wordlists::loader::words_from_slice;
use wordle_advisor::wordlists::{FrequencyTable, Lexicon};

const VOCABULARY: &[&str] = &[
    "crane", "tonus", "slate", "irate", "crate", "stone", "notes", "onset", "unset", "nutso",
    "bonus", "snout", "audio", "about", "mount", "sound", "round", "found", "pious", "lotus",
];

fn lexicon() -> Lexicon {
    Lexicon::from_words(words_from_slice(VOCABULARY))
}

#[test]
fn crane_against_tonus_end_to_end() {
    let lexicon = lexicon();
    let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();
    let crane = Word::new("crane").unwrap();
    let tonus = Word::new("tonus").unwrap();
    let pattern = Pattern::calculate(&crane, &tonus);
    assert_eq!(pattern.to_string(), "xxxyx");

    let remaining = session.apply(Observation::new(crane.clone(), pattern)).unwrap();

    let consistent = lexicon
        .guess_words()
        .iter()
        .filter(|w| Pattern::calculate(&crane, w) == pattern)
        .count();
    assert_eq!(remaining, consistent);
    assert_eq!(session.pool().len(), consistent);

    let rec = session.recommend().unwrap();
    assert_eq!(rec.pool_size, consistent);
    assert!(rec.possible_answers.iter().all(|c| c.is_possible_answer));

    let tonus_answer = rec
        .possible_answers
        .iter()
        .find(|c| c.word.text() == "tonus")
        .expect("tonus is listed among the possible answers");
    assert!(tonus_answer.is_possible_answer);

    let tonus_top = rec
        .top
        .iter()
        .find(|c| c.word.text() == "tonus")
        .expect("tonus is ranked in the top recommendations");
    assert!(tonus_top.is_possible_answer);
}

#[test]
fn every_true_observation_keeps_the_answer() {
    let lexicon = lexicon();
    let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

    for answer in lexicon.guess_words() {
        session.reset();
        for guess in ["crane", "audio", "lotus"] {
            let before = session.pool().len();
            let guess = Word::new(guess).unwrap();
            let left = session.apply(Observation::against(guess, answer)).unwrap();
            assert!(left <= before);
            assert!(session.pool().contains(answer));
        }
    }
}

#[test]
fn recommendations_are_deterministic_and_ordered() {
    let lexicon = lexicon();
    let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();
    session.apply_str("slate", "xxxyx").unwrap();

    let first = session.recommend().unwrap();
    let second = session.recommend().unwrap();
    assert_eq!(first, second);

    for pair in first.top.windows(2) {
        assert!(pair[0].primary >= pair[1].primary - 1e-9);
    }
    for c in &first.top {
        let metrics = calculate_metrics(c.word, session.pool().words());
        assert!(metrics.entropy >= 0.0);
        assert!(metrics.entropy <= (session.pool().len() as f64).log2() + 1e-9);
    }
}

#[test]
fn errors_are_recoverable() {
    let lexicon = lexicon();
    let mut session = Session::new(&lexicon, SessionConfig::default()).unwrap();

    assert!(matches!(
        session.apply_str("crane", "gyb"),
        Err(SolverError::MalformedObservation(_))
    ));
    assert_eq!(session.pool().len(), lexicon.guess_words().len());

    assert!(matches!(
        session.apply_str("qqqqq", "ggggg"),
        Err(SolverError::EmptyPool { .. })
    ));
    assert!(matches!(session.recommend(), Err(SolverError::EmptyPool { .. })));

    session.undo();
    let rec = session.recommend().unwrap();
    assert_eq!(rec.pool_size, lexicon.guess_words().len());
}

#[test]
fn hard_mode_and_bot_mode() {
    let table = FrequencyTable::parse(
        "word,frequency\ntonus,20\nbonus,900\nlotus,300\nmount,700\nsound,1000\n",
    )
    .unwrap();
    let lexicon = Lexicon::new(words_from_slice(VOCABULARY), Some(table));

    let bot = SessionConfig {
        mode: Mode::Bot,
        top_n: 3,
        ..SessionConfig::default()
    };
    let mut session = Session::new(&lexicon, bot).unwrap();
    assert_eq!(session.pool().len(), 5);

    let rec = session.recommend().unwrap();
    assert_eq!(rec.top.len(), 3);
    assert!(rec.top.windows(2).all(|p| p[0].primary <= p[1].primary + 1e-9));

    session
        .apply(Observation::against(Word::new("crane").unwrap(), &Word::new("bonus").unwrap()))
        .unwrap();
    assert!(session.pool().words().iter().all(|w| lexicon.solutions().contains(w)));

    let hard = SessionConfig {
        hard_mode: true,
        ..SessionConfig::default()
    };
    let mut session = Session::new(&lexicon, hard).unwrap();
    session.apply_str("crane", "xxxyx").unwrap();
    let rec = session.recommend().unwrap();
    assert!(rec.top.iter().all(|c| session.pool().contains(c.word)));
}
