use serde_json::json;
use smetl::{parse_listing, write_listing_to, LISTING_FIELDS};

/// A captured-shape listing payload: `data.children[*].data` is walked, the
/// epoch float becomes the fixed timestamp shape, and the permalink is made
/// absolute.
#[test]
fn parses_listing_payload() {
    let payload = json!({
        "kind": "Listing",
        "data": {
            "children": [
                {
                    "kind": "t3",
                    "data": {
                        "author": "bob",
                        "title": "Exam megathread",
                        "selftext": "post your questions here",
                        "link_flair_text": "Academic",
                        "score": 42,
                        "num_comments": 17,
                        "created_utc": 1136073600.0,
                        "permalink": "/r/SMU_Singapore/comments/abc/exam_megathread/"
                    }
                },
                {
                    "kind": "t3",
                    "data": {
                        "author": "alice",
                        "title": "No flair here",
                        "selftext": "",
                        "link_flair_text": null,
                        "score": 3,
                        "num_comments": 0,
                        "created_utc": 1136073660.0,
                        "permalink": "/r/SMU_Singapore/comments/def/no_flair/"
                    }
                }
            ]
        }
    });

    let posts = parse_listing(&payload).unwrap();
    assert_eq!(posts.len(), 2);

    assert_eq!(posts[0].timestamp, "2006-01-01 00:00:00");
    assert_eq!(posts[0].author, "bob");
    assert_eq!(posts[0].flair, "Academic");
    assert_eq!(
        posts[0].url,
        "https://old.reddit.com/r/SMU_Singapore/comments/abc/exam_megathread/"
    );

    // null flair and empty selftext come through as empty strings
    assert_eq!(posts[1].flair, "");
    assert_eq!(posts[1].body, "");
    assert_eq!(posts[1].timestamp, "2006-01-01 00:01:00");
}

/// A payload without `data.children` is a hard error, not an empty result.
#[test]
fn rejects_malformed_payload() {
    let err = parse_listing(&json!({"error": 429})).unwrap_err();
    assert!(err.to_string().contains("data.children"));
}

/// Listing CSV has the fixed column order and one row per post.
#[test]
fn listing_csv_shape() {
    let payload = json!({
        "data": { "children": [ { "data": {
            "author": "bob", "title": "t", "selftext": "b", "link_flair_text": "f",
            "score": 1, "num_comments": 2, "created_utc": 1136073600.0,
            "permalink": "/r/x/comments/1/t/"
        } } ] }
    });
    let posts = parse_listing(&payload).unwrap();

    let mut buf: Vec<u8> = Vec::new();
    write_listing_to(&mut buf, &posts).unwrap();
    let out = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], LISTING_FIELDS.join(","));
    assert_eq!(
        lines[1],
        "2006-01-01 00:00:00,bob,t,b,f,1,2,https://old.reddit.com/r/x/comments/1/t/"
    );
}
