//! Playback Integration Tests
//!
//! State machine transitions driven through the Player facade.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use vidplayer::{
    library::bundled_catalog, Entity, PauseOutcome, PlaybackState, Player, PlayerError, VideoId,
};

fn player() -> Player {
    Player::new(bundled_catalog().unwrap())
}

#[test]
fn test_initial_state_is_stopped() {
    let player = player();

    assert_eq!(player.state(), &PlaybackState::Stopped);
    assert!(player.current().is_none());
}

#[test]
fn test_play_unknown_video() {
    let mut player = player();

    let err = player.play("does_not_exist").unwrap_err();
    assert!(err.is_not_found(Entity::Video));
    assert!(player.state().is_stopped());
}

#[test]
fn test_play_switches_video() {
    let mut player = player();

    let first = player.play("amazing_cats_video_id").unwrap();
    assert_eq!(first.stopped, None);

    let second = player.play("funny_dogs_video_id").unwrap();
    assert_eq!(second.stopped, Some(VideoId::from("amazing_cats_video_id")));
    assert_eq!(second.playing, VideoId::from("funny_dogs_video_id"));

    let (video, paused) = player.current().unwrap();
    assert_eq!(video.title(), "Funny Dogs");
    assert!(!paused);
}

#[test]
fn test_replay_same_video_restarts() {
    let mut player = player();

    player.play("amazing_cats_video_id").unwrap();
    player.pause().unwrap();

    let again = player.play("amazing_cats_video_id").unwrap();
    assert_eq!(again.stopped, Some(VideoId::from("amazing_cats_video_id")));
    assert_eq!(
        player.state(),
        &PlaybackState::Playing(VideoId::from("amazing_cats_video_id"))
    );
}

#[test]
fn test_pause_then_resume_round_trip() {
    let mut player = player();
    let id = VideoId::from("life_at_google_video_id");

    player.play(id.as_str()).unwrap();
    assert_eq!(player.pause(), Ok(PauseOutcome::Paused(id.clone())));
    assert_eq!(player.pause(), Ok(PauseOutcome::AlreadyPaused(id.clone())));

    let (_, paused) = player.current().unwrap();
    assert!(paused);

    assert_eq!(player.resume(), Ok(id.clone()));
    assert_eq!(player.state(), &PlaybackState::Playing(id));
    assert_eq!(player.resume(), Err(PlayerError::NotPaused));
}

#[test]
fn test_commands_while_stopped() {
    let mut player = player();

    assert_eq!(player.stop(), Err(PlayerError::NothingPlaying));
    assert_eq!(player.pause(), Err(PlayerError::NothingPlaying));
    assert_eq!(player.resume(), Err(PlayerError::NothingPlaying));
}

#[test]
fn test_stop_after_pause() {
    let mut player = player();

    player.play("nothing_video_id").unwrap();
    player.pause().unwrap();

    assert_eq!(player.stop(), Ok(VideoId::from("nothing_video_id")));
    assert!(player.state().is_stopped());
}

#[test]
fn test_play_random_is_deterministic_with_seed() {
    let mut a = player();
    let mut b = player();

    let first = a.play_random_with(&mut StdRng::seed_from_u64(99)).unwrap();
    let second = b.play_random_with(&mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(first.playing, second.playing);
    assert!(a.video(first.playing.as_str()).is_some());
}

#[test]
fn test_play_random_stops_current() {
    let mut player = player();
    player.play("funny_dogs_video_id").unwrap();

    let started = player.play_random().unwrap();
    assert_eq!(started.stopped, Some(VideoId::from("funny_dogs_video_id")));
}

#[test]
fn test_play_flagged_keeps_active_video() {
    let mut player = player();

    player.play("funny_dogs_video_id").unwrap();
    player.flag("amazing_cats_video_id", Some("dup")).unwrap();

    match player.play("amazing_cats_video_id") {
        Err(PlayerError::Flagged { id, .. }) => assert_eq!(id.as_str(), "amazing_cats_video_id"),
        other => panic!("Expected Flagged, got {:?}", other),
    }
    assert_eq!(
        player.state(),
        &PlaybackState::Playing(VideoId::from("funny_dogs_video_id"))
    );
}

#[test]
fn test_play_random_covers_every_unflagged_video() {
    let mut player = player();
    player.flag("nothing_video_id", None).unwrap();

    let mut rng = StdRng::seed_from_u64(7);
    let mut counts: HashMap<VideoId, usize> = HashMap::new();
    for _ in 0..400 {
        let started = player.play_random_with(&mut rng).unwrap();
        *counts.entry(started.playing).or_default() += 1;
    }

    // Four candidates, roughly 100 draws each
    assert_eq!(counts.len(), 4);
    assert!(!counts.contains_key("nothing_video_id"));
    for (id, count) in &counts {
        assert!((50..=150).contains(count), "{} chosen {} times", id, count);
    }
}
