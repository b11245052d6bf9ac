//! Moderation Integration Tests
//!
//! Flag/allow behaviour and its interaction with playback, search and
//! playlists.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vidplayer::{Entity, PlaybackState, Player, PlayerError, Video, VideoCatalog, VideoId};

fn cat_player() -> Player {
    let catalog = VideoCatalog::from_videos(vec![
        Video::new("v1", "Amazing Cat Video", ["#cat"]),
        Video::new("v2", "Another Cat Video", ["#cat"]),
    ])
    .unwrap();
    Player::new(catalog)
}

#[test]
fn test_flag_playing_video_stops_playback() {
    let mut player = cat_player();

    player.play("v1").unwrap();
    assert_eq!(player.state(), &PlaybackState::Playing(VideoId::from("v1")));

    let applied = player.flag("v1", Some("dup")).unwrap();
    assert!(applied.stopped_playback);
    assert_eq!(applied.reason, "dup");
    assert_eq!(player.state(), &PlaybackState::Stopped);

    // Flagged video can no longer be played
    match player.play("v1") {
        Err(PlayerError::Flagged { id, reason }) => {
            assert_eq!(id.as_str(), "v1");
            assert_eq!(reason, "dup");
        }
        other => panic!("Expected Flagged, got {:?}", other),
    }
    assert_eq!(player.state(), &PlaybackState::Stopped);

    // Only v2 is eligible for random playback
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let started = player.play_random_with(&mut rng).unwrap();
        assert_eq!(started.playing.as_str(), "v2");
    }
}

#[test]
fn test_flag_paused_video_stops_playback() {
    let mut player = cat_player();

    player.play("v2").unwrap();
    player.pause().unwrap();

    let applied = player.flag("v2", None).unwrap();
    assert!(applied.stopped_playback);
    assert!(player.current().is_none());
}

#[test]
fn test_flag_other_video_keeps_playback() {
    let mut player = cat_player();

    player.play("v1").unwrap();
    player.pause().unwrap();

    let applied = player.flag("v2", Some("spam")).unwrap();
    assert!(!applied.stopped_playback);
    assert_eq!(player.state(), &PlaybackState::Paused(VideoId::from("v1")));
}

#[test]
fn test_flag_errors() {
    let mut player = cat_player();

    let err = player.flag("missing", None).unwrap_err();
    assert!(err.is_not_found(Entity::Video));

    player.flag("v1", None).unwrap();
    assert_eq!(
        player.flag("v1", Some("again")).unwrap_err(),
        PlayerError::AlreadyFlagged {
            id: VideoId::from("v1")
        }
    );
    // First reason is kept
    assert_eq!(
        player.video("v1").and_then(Video::flag_reason),
        Some("Not supplied")
    );
}

#[test]
fn test_allow_restores_eligibility() {
    let mut player = cat_player();

    assert_eq!(
        player.allow("v1").unwrap_err(),
        PlayerError::NotFlagged {
            id: VideoId::from("v1")
        }
    );
    assert!(player.allow("missing").unwrap_err().is_not_found(Entity::Video));

    player.flag("v1", Some("dup")).unwrap();
    assert_eq!(player.search_tag("#cat").len(), 1);

    let video = player.allow("v1").unwrap();
    assert!(!video.is_flagged());
    assert!(video.flag_reason().is_none());

    assert_eq!(player.search_tag("#cat").len(), 2);
    assert!(player.play("v1").is_ok());
}

#[test]
fn test_all_flagged_means_none_available() {
    let mut player = cat_player();
    player.flag("v1", None).unwrap();
    player.flag("v2", None).unwrap();

    assert_eq!(player.play_random(), Err(PlayerError::NoneAvailable));
    assert!(player.state().is_stopped());
}

#[test]
fn test_flagged_video_stays_in_playlist() {
    let mut player = cat_player();
    player.create_playlist("My List").unwrap();
    player.create_playlist("Other").unwrap();

    player.add_to_playlist("My List", "v1").unwrap();
    player.flag("v1", Some("dup")).unwrap();

    // Cannot be added anywhere once flagged
    match player.add_to_playlist("Other", "v1") {
        Err(PlayerError::Flagged { reason, .. }) => assert_eq!(reason, "dup"),
        other => panic!("Expected Flagged, got {:?}", other),
    }
    assert!(player.playlist("Other").unwrap().is_empty());

    // But it is still listed where it already was
    let videos = player.playlist_videos("my list").unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id().as_str(), "v1");
    assert!(videos[0].is_flagged());
}

#[test]
fn test_flag_records_time() {
    let mut player = cat_player();

    let before = Utc::now();
    player.flag("v1", Some("dup")).unwrap();
    let after = Utc::now();

    let flag = player.video("v1").and_then(Video::flag).unwrap();
    assert_eq!(flag.reason, "dup");
    assert!(before <= flag.flagged_at && flag.flagged_at <= after);

    player.allow("v1").unwrap();
    assert!(player.video("v1").and_then(Video::flag).is_none());
}
