//! Tokenization snapshots for the sample corpus
//!
//! Each sample in `docs/samples` is tokenized and rendered one token per line as
//! `line:column category "text"`.

use desel::desel::testing::Samples;
use desel::desel::token::render;

fn rendered(name: &str) -> String {
    let stream = Samples::tokenize(name);
    assert_eq!(stream.detokenize(), Samples::source(name));
    render(&stream)
}

#[test]
fn test_000_comments_tokenization() {
    insta::assert_snapshot!(rendered("000-comments"), @r###"
    0:0 comment "Free-form notes are comments."
    0:29 newline "\n"
    1:0 comment "    indented %set is still a comment"
    1:36 newline "\n"
    2:0 comment "#%Hidden"
    2:8 newline "\n"
    3:0 newline "\n"
    4:0 set-marker "%"
    4:1 label "Visible"
    4:8 newline "\n"
    "###);
}

#[test]
fn test_010_sets_and_elements_tokenization() {
    insta::assert_snapshot!(rendered("010-sets-and-elements"), @r###"
    0:0 comment "# Sets of fruit"
    0:15 newline "\n"
    1:0 set-marker "%"
    1:1 label "Fruit"
    1:6 whitespace " "
    1:7 element-marker "@"
    1:8 label "apple"
    1:13 whitespace " "
    1:14 element-marker "@"
    1:15 label "banana"
    1:21 newline "\n"
    2:0 element-marker "@"
    2:1 label "cherry"
    2:7 whitespace " "
    2:8 set-marker "%"
    2:9 label "Fruit"
    2:14 whitespace " "
    2:15 set-marker "%"
    2:16 label "Red"
    2:19 newline "\n"
    "###);
}

#[test]
fn test_020_expressions_tokenization() {
    insta::assert_snapshot!(rendered("020-expressions"), @r###"
    0:0 set-marker "%"
    0:1 label "Sweet"
    0:6 whitespace " "
    0:7 set-marker "%"
    0:8 label "Fruit"
    0:13 whitespace " "
    0:14 minus-op "-"
    0:15 whitespace " "
    0:16 set-marker "%"
    0:17 label "Sour"
    0:21 newline "\n"
    1:0 set-marker "%"
    1:1 label "Picked"
    1:7 whitespace " "
    1:8 left-paren "("
    1:9 set-marker "%"
    1:10 label "Fruit"
    1:15 whitespace " "
    1:16 and-op "&"
    1:17 whitespace " "
    1:18 not-op "!"
    1:19 set-marker "%"
    1:20 label "Sour"
    1:24 right-paren ")"
    1:25 whitespace " "
    1:26 comment "# keep tart ones out"
    1:46 newline "\n"
    "###);
}

#[test]
fn test_030_quoting_tokenization() {
    insta::assert_snapshot!(rendered("030-quoting"), @r###"
    0:0 element-marker "@"
    0:1 label "'e 5'"
    0:6 whitespace " "
    0:7 element-marker "@"
    0:8 label "\"e  6\""
    0:14 whitespace " "
    0:15 label "a'b"
    0:18 newline "\n"
    1:0 element-marker "@"
    1:1 label "\"it's\""
    1:7 whitespace " "
    1:8 label "'open"
    1:13 newline "\n"
    "###);
}

#[test]
fn test_quoting_sample_has_one_open_label() {
    let stream = Samples::tokenize("030-quoting");
    let open: Vec<_> = stream.unterminated_labels().map(|t| t.as_tuple()).collect();
    assert_eq!(
        open,
        vec![(desel::desel::Category::Label, "'open", 1, 8)]
    );
}
