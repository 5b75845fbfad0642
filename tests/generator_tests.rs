use rustc_hash::FxHashSet;
use std::cell::RefCell;
use wordle_autosolver::core::{Feedback, Template, Word};
use wordle_autosolver::solver::{
    CandidateSource, ConstraintState, DictionaryOracle, GenerateOptions, filter, generate,
};
use wordle_autosolver::wordlists::DICTIONARY;
use wordle_autosolver::wordlists::loader::words_from_slice;

fn dictionary_set() -> FxHashSet<Word> {
    words_from_slice(DICTIONARY).into_iter().collect()
}

fn sorted_texts(words: &[Word]) -> Vec<String> {
    let mut texts: Vec<String> = words.iter().map(ToString::to_string).collect();
    texts.sort();
    texts
}

#[test]
fn pattern_with_letter_pool() {
    let dictionary = dictionary_set();
    let template = Template::parse("__e__").unwrap();

    let found = generate(
        &template,
        "abdknpo",
        &CandidateSource::Dictionary(&dictionary),
        &GenerateOptions::default(),
    );

    // every result has e in the middle and only pool letters elsewhere
    for word in &found {
        assert_eq!(word.char_at(2), b'e');
        let mut pool: Vec<u8> = b"abdknpo".to_vec();
        for (i, &ch) in word.chars().iter().enumerate() {
            if i == 2 {
                continue;
            }
            let at = pool.iter().position(|&p| p == ch).unwrap();
            pool.remove(at);
        }
    }
    let texts = sorted_texts(&found);
    assert!(texts.contains(&"knead".to_string()));
    assert!(texts.contains(&"abend".to_string()));
}

#[test]
fn dictionary_and_oracle_sources_agree() {
    let words = words_from_slice(DICTIONARY);
    let set: FxHashSet<Word> = words.iter().cloned().collect();
    let oracle = DictionaryOracle::new(&words);
    let template = Template::parse("s___y").unwrap();

    let fast = generate(
        &template,
        "tornea",
        &CandidateSource::Dictionary(&set),
        &GenerateOptions::default(),
    );
    let slow = generate(
        &template,
        "tornea",
        &CandidateSource::Oracle(&oracle),
        &GenerateOptions::default(),
    );

    assert_eq!(sorted_texts(&fast), sorted_texts(&slow));
    assert!(sorted_texts(&fast).contains(&"story".to_string()));
}

#[test]
fn oracle_sees_lowercase_candidates() {
    let asked = RefCell::new(Vec::new());
    let oracle = |s: &str| {
        asked.borrow_mut().push(s.to_string());
        false
    };
    let template = Template::parse("DUV_T").unwrap();

    let found = generate(
        &template,
        "EA",
        &CandidateSource::Oracle(&oracle),
        &GenerateOptions::default(),
    );

    assert!(found.is_empty());
    assert_eq!(*asked.borrow(), ["duvet", "duvat"]);
}

#[test]
fn generated_candidates_can_be_filtered() {
    let dictionary = dictionary_set();
    let template = Template::parse("_____").unwrap();
    let found = generate(
        &template,
        "duvetsory",
        &CandidateSource::Dictionary(&dictionary),
        &GenerateOptions::default(),
    );
    assert!(found.len() >= 2);

    let guess = Word::new("story").unwrap();
    let target = Word::new("duvet").unwrap();
    let state = ConstraintState::new().updated(&guess, &Feedback::calculate(&guess, &target));

    let remaining = filter(&found, &state);
    assert!(remaining.contains(&target));
    assert!(!remaining.contains(&guess));
}
