//! Comprehensive mutation tests

use scribe_editor::{execute, InsertPosition, Mutation, MutationError, Occurrence};
use serde_json::json;

fn lines_text(n: usize) -> String {
    (1..=n)
        .map(|i| format!("line{}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_update_single_line() {
    let result = execute(
        "update_doc_by_line",
        &json!({ "start_line": 2, "end_line": 2, "new_content": "REPLACED" }),
        "line1\nline2\nline3",
    );

    assert_eq!(result.new_content(), Some("line1\nREPLACED\nline3"));
}

#[test]
fn test_update_range_collapses_to_one_line() {
    let mutation = Mutation::UpdateDocByLine {
        start_line: 1,
        end_line: 3,
        new_content: "only".to_string(),
    };

    assert_eq!(mutation.apply("a\nb\nc\nd").unwrap(), "only\nd");
}

#[test]
fn test_update_with_embedded_newlines_expands() {
    let mutation = Mutation::UpdateDocByLine {
        start_line: 2,
        end_line: 2,
        new_content: "x\ny\nz".to_string(),
    };

    let text = mutation.apply("a\nb\nc").unwrap();
    assert_eq!(text, "a\nx\ny\nz\nc");
    assert_eq!(text.split('\n').count(), 5);
}

#[test]
fn test_delete_tail() {
    let result = execute("delete_lines", &json!({ "start_line": 2, "end_line": 3 }), "a\nb\nc");
    assert_eq!(result.new_content(), Some("a"));
}

#[test]
fn test_delete_everything() {
    let mutation = Mutation::DeleteLines {
        start_line: 1,
        end_line: 3,
    };
    assert_eq!(mutation.apply("a\nb\nc").unwrap(), "");
}

#[test]
fn test_delete_trailing_empty_line() {
    let mutation = Mutation::DeleteLines {
        start_line: 3,
        end_line: 3,
    };
    assert_eq!(mutation.apply("a\nb\n").unwrap(), "a\nb");
}

#[test]
fn test_replace_all() {
    let result = execute(
        "update_doc_by_replace",
        &json!({ "old_string": "hello", "new_string": "hi", "occurrence": "all" }),
        "hello world hello",
    );
    assert_eq!(result.new_content(), Some("hi world hi"));
}

#[test]
fn test_replace_last() {
    let result = execute(
        "update_doc_by_replace",
        &json!({ "old_string": "hello", "new_string": "hi", "occurrence": "last" }),
        "hello world hello",
    );
    assert_eq!(result.new_content(), Some("hello world hi"));
}

#[test]
fn test_replace_first() {
    let result = execute(
        "update_doc_by_replace",
        &json!({ "old_string": "hello", "new_string": "hi", "occurrence": "first" }),
        "hello world hello",
    );
    assert_eq!(result.new_content(), Some("hi world hello"));
}

#[test]
fn test_replace_is_literal_not_pattern() {
    let mutation = Mutation::UpdateDocByReplace {
        old_string: "a.c".to_string(),
        new_string: "X".to_string(),
        occurrence: Occurrence::All,
    };

    assert_eq!(mutation.apply("abc a.c").unwrap(), "abc X");
}

#[test]
fn test_replace_spans_lines() {
    let mutation = Mutation::UpdateDocByReplace {
        old_string: "end\nstart".to_string(),
        new_string: "joined".to_string(),
        occurrence: Occurrence::First,
    };

    assert_eq!(mutation.apply("the end\nstart again").unwrap(), "the joined again");
}

#[test]
fn test_replace_all_non_overlapping() {
    let mutation = Mutation::UpdateDocByReplace {
        old_string: "aa".to_string(),
        new_string: "b".to_string(),
        occurrence: Occurrence::All,
    };

    assert_eq!(mutation.apply("aaa").unwrap(), "ba");
}

#[test]
fn test_replace_not_found() {
    let result = execute(
        "update_doc_by_replace",
        &json!({ "old_string": "absent", "new_string": "x", "occurrence": "first" }),
        "hello",
    );
    assert_eq!(result.error(), Some("Text \"absent\" not found in document"));
}

#[test]
fn test_insert_before_first_line() {
    let result = execute(
        "insert_at_line",
        &json!({ "line_number": 1, "content": "NEW", "position": "before" }),
        "x\ny",
    );
    assert_eq!(result.new_content(), Some("NEW\nx\ny"));
}

#[test]
fn test_insert_after_last_line() {
    let mutation = Mutation::InsertAtLine {
        line_number: 2,
        content: "NEW".to_string(),
        position: InsertPosition::After,
    };
    assert_eq!(mutation.apply("x\ny").unwrap(), "x\ny\nNEW");
}

#[test]
fn test_insert_into_empty_document() {
    let after = Mutation::InsertAtLine {
        line_number: 1,
        content: "x".to_string(),
        position: InsertPosition::After,
    };
    assert_eq!(after.apply("").unwrap(), "\nx");

    let before = Mutation::InsertAtLine {
        line_number: 1,
        content: "x".to_string(),
        position: InsertPosition::Before,
    };
    assert_eq!(before.apply("").unwrap(), "x\n");
}

#[test]
fn test_insert_preserves_existing_lines() {
    let text = lines_text(5);
    let mutation = Mutation::InsertAtLine {
        line_number: 3,
        content: "a\nb".to_string(),
        position: InsertPosition::Before,
    };

    let new_text = mutation.apply(&text).unwrap();
    assert_eq!(new_text, "line1\nline2\na\nb\nline3\nline4\nline5");
}

#[test]
fn test_append() {
    let result = execute("append_to_document", &json!({ "content": "more" }), "doc");
    assert_eq!(result.new_content(), Some("doc\nmore"));
}

#[test]
fn test_append_to_empty_document_starts_with_blank_line() {
    let result = execute("append_to_document", &json!({ "content": "first" }), "");
    assert_eq!(result.new_content(), Some("\nfirst"));
}

#[test]
fn test_append_is_not_idempotent() {
    let mutation = Mutation::AppendToDocument {
        content: "x".to_string(),
    };

    let once = mutation.apply("doc").unwrap();
    let twice = mutation.apply(&once).unwrap();

    assert_eq!(twice, "doc\nx\nx");
    assert!(twice.len() > once.len());
}

#[test]
fn test_range_failure_reports_bounds_and_count() {
    let result = execute(
        "update_doc_by_line",
        &json!({ "start_line": 1, "end_line": 5, "new_content": "z" }),
        "a\nb",
    );

    let error = result.error().unwrap();
    assert!(error.contains("1-5"), "{}", error);
    assert!(error.contains('2'), "{}", error);
}

#[test]
fn test_unknown_function() {
    let result = execute("nonexistent_command", &json!({}), "text");
    assert_eq!(result.error(), Some("Unknown function: nonexistent_command"));
}

#[test]
fn test_update_and_delete_bounds() {
    for n in 1..=5 {
        let text = lines_text(n);
        let count = n as i64;

        for start in 1..=count {
            for end in start..=count {
                let update = Mutation::UpdateDocByLine {
                    start_line: start,
                    end_line: end,
                    new_content: "X".to_string(),
                };
                let updated = update.apply(&text).unwrap();
                let removed = (end - start + 1) as usize;
                assert_eq!(updated.split('\n').count(), n - removed + 1);

                let delete = Mutation::DeleteLines {
                    start_line: start,
                    end_line: end,
                };
                let deleted = delete.apply(&text).unwrap();
                if removed == n {
                    assert_eq!(deleted, "");
                } else {
                    assert_eq!(deleted.split('\n').count(), n - removed);
                }
            }
        }

        let invalid = [(0, 1), (1, count + 1), (count, count - 1), (0, count + 1)];
        for (start, end) in invalid {
            let update = Mutation::UpdateDocByLine {
                start_line: start,
                end_line: end,
                new_content: "X".to_string(),
            };
            assert_eq!(
                update.apply(&text),
                Err(MutationError::InvalidLineRange {
                    start,
                    end,
                    line_count: n
                })
            );

            let delete = Mutation::DeleteLines {
                start_line: start,
                end_line: end,
            };
            assert!(delete.apply(&text).is_err());
        }
    }
}

#[test]
fn test_insert_bounds() {
    for n in 1..=5 {
        let text = lines_text(n);
        let count = n as i64;

        for line in 1..=count {
            for position in [InsertPosition::Before, InsertPosition::After] {
                let insert = Mutation::InsertAtLine {
                    line_number: line,
                    content: "NEW".to_string(),
                    position,
                };
                let inserted = insert.apply(&text).unwrap();
                let lines: Vec<&str> = inserted.split('\n').collect();

                assert_eq!(lines.len(), n + 1);
                let expected_index = match position {
                    InsertPosition::Before => line as usize - 1,
                    InsertPosition::After => line as usize,
                };
                assert_eq!(lines[expected_index], "NEW");
            }
        }

        for line in [0, count + 1] {
            let insert = Mutation::InsertAtLine {
                line_number: line,
                content: "NEW".to_string(),
                position: InsertPosition::After,
            };
            assert_eq!(
                insert.apply(&text),
                Err(MutationError::InvalidLineNumber {
                    line,
                    line_count: n
                })
            );
        }
    }
}

#[test]
fn test_failure_never_partially_applies() {
    let text = "keep\nme";
    let bad_calls = [
        ("delete_lines", json!({ "start_line": 2, "end_line": 1 })),
        ("update_doc_by_line", json!({ "start_line": 0, "end_line": 1, "new_content": "x" })),
        ("insert_at_line", json!({ "line_number": 3, "content": "x", "position": "after" })),
        ("update_doc_by_replace", json!({ "old_string": "gone", "new_string": "x", "occurrence": "all" })),
        ("update_doc_by_replace", json!({ "old_string": "keep", "new_string": "x", "occurrence": "every" })),
        ("append_to_document", json!({})),
    ];

    for (name, args) in bad_calls {
        let result = execute(name, &args, text);
        assert!(!result.is_success(), "{} unexpectedly succeeded", name);
        assert!(result.new_content().is_none());
    }
}
