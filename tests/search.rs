//! Search Integration Tests
//!
//! Title and tag search ordering and flag filtering.

use vidplayer::{library::bundled_catalog, Player, Video, VideoCatalog};

fn titles(videos: &[&Video]) -> Vec<String> {
    videos.iter().map(|v| v.title().to_string()).collect()
}

#[test]
fn test_tag_search_before_and_after_flag() {
    let catalog = VideoCatalog::from_videos(vec![
        Video::new("v2", "Another Cat Video", ["#cat"]),
        Video::new("v1", "Amazing Cat Video", ["#cat"]),
    ])
    .unwrap();
    let mut player = Player::new(catalog);

    assert_eq!(
        titles(&player.search_tag("#cat")),
        vec!["Amazing Cat Video", "Another Cat Video"]
    );

    player.flag("v1", Some("dup")).unwrap();

    let results = player.search_tag("#cat");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id().as_str(), "v2");
}

#[test]
fn test_title_search_on_bundled_catalog() {
    let player = Player::new(bundled_catalog().unwrap());

    assert_eq!(
        titles(&player.search_titles("cat")),
        vec!["Amazing Cats", "Another Cat Video"]
    );
    assert_eq!(
        titles(&player.search_titles("VIDEO")),
        vec!["Another Cat Video", "Video about nothing"]
    );
    assert!(player.search_titles("blah").is_empty());
}

#[test]
fn test_tag_search_on_bundled_catalog() {
    let player = Player::new(bundled_catalog().unwrap());

    assert_eq!(
        titles(&player.search_tag("#ANIMAL")),
        vec!["Amazing Cats", "Another Cat Video", "Funny Dogs"]
    );
    assert!(player.search_tag("animal").is_empty());
    assert!(player.search_tag("#anim").is_empty());
}

#[test]
fn test_search_service_shares_catalog_view() {
    let player = Player::new(bundled_catalog().unwrap());
    let search = player.search();

    assert_eq!(search.by_tag("#google").len(), 1);
    assert_eq!(search.by_title_substring("").len(), 5);
}
