use caption_core::tokenizer::{
    classify, has_word_char, normalize, split_sentences, tokenize, tokenize_opt, TokenClass,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_and_missing_captions_yield_nothing() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n  ").is_empty());
    assert!(tokenize_opt(None).is_empty());
}

#[test]
fn single_sentence_keeps_terminal_punctuation() {
    assert_eq!(tokenize("Hello world."), strings(&["Hello world."]));
}

#[test]
fn hashtags_are_split_from_prose_and_each_other() {
    assert_eq!(
        tokenize("Great day! #sunny #fun"),
        strings(&["Great day!", "#sunny", "#fun"])
    );
}

#[test]
fn punctuation_only_yields_nothing() {
    assert!(tokenize("... !!! ???").is_empty());
    assert!(tokenize("!").is_empty());
}

#[test]
fn text_around_a_hashtag_is_flushed_on_both_sides() {
    // Prose before the hashtag is flushed when it is reached; prose after it
    // is flushed at the end even without terminal punctuation.
    assert_eq!(
        tokenize("Love this #vibe so much"),
        strings(&["Love this", "#vibe", "so much"])
    );
}

#[test]
fn multiple_sentences_split_on_punctuation_followed_by_whitespace() {
    assert_eq!(
        tokenize("First one. Second one!  Third one? Fourth"),
        strings(&["First one.", "Second one!", "Third one?", "Fourth"])
    );
}

#[test]
fn punctuation_without_following_whitespace_does_not_split() {
    assert_eq!(
        tokenize("Visit example.com today. Thanks"),
        strings(&["Visit example.com today.", "Thanks"])
    );
}

#[test]
fn punctuation_runs_stay_attached() {
    assert_eq!(
        tokenize("Wow!!! Really?! ok..."),
        strings(&["Wow!!!", "Really?!", "ok..."])
    );
}

#[test]
fn newlines_act_as_spaces() {
    assert_eq!(
        tokenize("Line one.\nLine two\n#tag\n"),
        strings(&["Line one.", "Line two", "#tag"])
    );
}

#[test]
fn consecutive_hashtags_keep_original_order() {
    assert_eq!(
        tokenize("#a#b #c_d"),
        strings(&["#a", "#b", "#c_d"])
    );
}

#[test]
fn hashtag_stops_at_first_non_word_character() {
    assert_eq!(
        tokenize("#multi-word"),
        strings(&["#multi", "-word"])
    );
}

#[test]
fn bare_hash_is_plain_text() {
    assert_eq!(
        tokenize("We are # 1 now. #1"),
        strings(&["We are # 1 now.", "#1"])
    );
    assert!(tokenize("# !").is_empty());
}

#[test]
fn unicode_letters_count_as_word_characters() {
    assert_eq!(
        tokenize("Café au lait. #été 😀"),
        strings(&["Café au lait.", "#été"])
    );
}

#[test]
fn emoji_survive_inside_sentences() {
    assert_eq!(
        tokenize("So happy 😀! See you"),
        strings(&["So happy 😀!", "See you"])
    );
}

#[test]
fn emoji_only_fragments_are_dropped() {
    assert_eq!(
        tokenize("Done. 😀🎉 #yay"),
        strings(&["Done.", "#yay"])
    );
}

#[test]
fn every_statement_has_a_word_character() {
    let captions = [
        "!!! . ? hi",
        "a. . . b",
        "#x ... #y !!!",
        "  ...\n... wow ",
        "— – · ! #tag —",
    ];
    for caption in captions {
        for statement in tokenize(caption) {
            assert!(has_word_char(&statement), "{statement:?} from {caption:?}");
            assert_eq!(statement, statement.trim());
        }
    }
}

#[test]
fn classification_is_total() {
    let text = normalize("  Hi there!! #tag # bare...? ok\n");
    let tokens = classify(&text);

    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, text);

    let classes: Vec<TokenClass> = tokens.iter().map(|t| t.class).collect();
    assert_eq!(classes[0], TokenClass::Other);
    assert_eq!(classes[1], TokenClass::Punctuation);
    assert!(tokens
        .iter()
        .any(|t| t.class == TokenClass::Hashtag && t.text == "#tag"));
}

#[test]
fn split_sentences_filters_and_trims() {
    assert_eq!(
        split_sentences(" One.  . Two! "),
        strings(&["One.", "Two!"])
    );
    assert!(split_sentences("   ").is_empty());
}

#[test]
fn underscore_is_a_word_character() {
    assert!(has_word_char("_"));
    assert!(!has_word_char("?!."));
    assert_eq!(tokenize("_ ."), strings(&["_ ."]));
}
