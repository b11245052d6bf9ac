//! Interactive command shell.
//!
//! Reads one command per line, runs it against the player and prints the
//! outcome. Failures are printed and the loop continues; only EXIT or end of
//! input stops it.

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;
use tracing::warn;

use super::display::{cannot, reason, video_line};
use crate::core::Player;
use crate::domain::{PauseOutcome, PlayStarted, PlayerError, PlayerResult, VideoId};

const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video: String },
    RemoveFromPlaylist { playlist: String, video: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// Why a line could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty line")]
    Empty,

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Please enter {command} command followed by {expected}.")]
    Usage {
        command: &'static str,
        expected: &'static str,
    },

    #[error("{0} command takes no arguments.")]
    UnexpectedArguments(&'static str),
}

impl ShellCommand {
    /// Parse a line; the command word is case-insensitive
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let usage = |command: &'static str, expected: &'static str| ParseError::Usage {
            command,
            expected,
        };
        let one = |command: &'static str, expected: &'static str| match args.as_slice() {
            [arg] => Ok(arg.to_string()),
            _ => Err(usage(command, expected)),
        };
        let none = |cmd: ShellCommand, command: &'static str| {
            if args.is_empty() {
                Ok(cmd)
            } else {
                Err(ParseError::UnexpectedArguments(command))
            }
        };

        match command.as_str() {
            "NUMBER_OF_VIDEOS" => none(ShellCommand::NumberOfVideos, "NUMBER_OF_VIDEOS"),
            "SHOW_ALL_VIDEOS" => none(ShellCommand::ShowAllVideos, "SHOW_ALL_VIDEOS"),
            "PLAY" => one("PLAY", "video_id").map(ShellCommand::Play),
            "PLAY_RANDOM" => none(ShellCommand::PlayRandom, "PLAY_RANDOM"),
            "STOP" => none(ShellCommand::Stop, "STOP"),
            "PAUSE" => none(ShellCommand::Pause, "PAUSE"),
            "CONTINUE" => none(ShellCommand::Continue, "CONTINUE"),
            "SHOW_PLAYING" => none(ShellCommand::ShowPlaying, "SHOW_PLAYING"),
            "CREATE_PLAYLIST" => {
                one("CREATE_PLAYLIST", "playlist_name").map(ShellCommand::CreatePlaylist)
            }
            "ADD_TO_PLAYLIST" => match args.as_slice() {
                [playlist, video] => Ok(ShellCommand::AddToPlaylist {
                    playlist: playlist.to_string(),
                    video: video.to_string(),
                }),
                _ => Err(usage("ADD_TO_PLAYLIST", "playlist_name and video_id")),
            },
            "REMOVE_FROM_PLAYLIST" => match args.as_slice() {
                [playlist, video] => Ok(ShellCommand::RemoveFromPlaylist {
                    playlist: playlist.to_string(),
                    video: video.to_string(),
                }),
                _ => Err(usage("REMOVE_FROM_PLAYLIST", "playlist_name and video_id")),
            },
            "CLEAR_PLAYLIST" => {
                one("CLEAR_PLAYLIST", "playlist_name").map(ShellCommand::ClearPlaylist)
            }
            "DELETE_PLAYLIST" => {
                one("DELETE_PLAYLIST", "playlist_name").map(ShellCommand::DeletePlaylist)
            }
            "SHOW_PLAYLIST" => one("SHOW_PLAYLIST", "playlist_name").map(ShellCommand::ShowPlaylist),
            "SHOW_ALL_PLAYLISTS" => none(ShellCommand::ShowAllPlaylists, "SHOW_ALL_PLAYLISTS"),
            "SEARCH_VIDEOS" => one("SEARCH_VIDEOS", "search_term").map(ShellCommand::SearchVideos),
            "SEARCH_VIDEOS_WITH_TAG" => {
                one("SEARCH_VIDEOS_WITH_TAG", "tag_name").map(ShellCommand::SearchVideosWithTag)
            }
            "FLAG_VIDEO" => match args.split_first() {
                Some((video, rest)) => Ok(ShellCommand::FlagVideo {
                    video: video.to_string(),
                    reason: if rest.is_empty() {
                        None
                    } else {
                        Some(rest.join(" "))
                    },
                }),
                None => Err(usage("FLAG_VIDEO", "video_id and an optional reason")),
            },
            "ALLOW_VIDEO" => one("ALLOW_VIDEO", "video_id").map(ShellCommand::AllowVideo),
            "HELP" => Ok(ShellCommand::Help),
            "EXIT" => Ok(ShellCommand::Exit),
            _ => Err(ParseError::Unknown(command.clone())),
        }
    }
}

/// Shell over a player, an input source and an output sink
pub struct Shell<R, W> {
    player: Player,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(player: Player, input: R, out: W) -> Self {
        Self { player, input, out }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Consume the shell, returning the player and output sink
    pub fn into_parts(self) -> (Player, W) {
        (self.player, self.out)
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Hello and welcome to vidplayer, what would you like to do?"
        )?;
        writeln!(
            self.out,
            "Enter HELP for list of available commands or EXIT to terminate."
        )?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match ShellCommand::parse(&line) {
                Ok(ShellCommand::Exit) => {
                    writeln!(
                        self.out,
                        "vidplayer has now terminated its execution. Thank you and goodbye!"
                    )?;
                    break;
                }
                Ok(command) => self.execute(command)?,
                Err(ParseError::Empty) => {}
                Err(err) => {
                    warn!(line = line.trim(), "Invalid shell input");
                    writeln!(self.out, "{}", err)?;
                }
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Execute one command, printing its outcome
    pub fn execute(&mut self, command: ShellCommand) -> Result<()> {
        let Self { player, input, out } = self;

        match command {
            ShellCommand::NumberOfVideos => {
                writeln!(out, "{} videos in the library", player.catalog().count())?;
            }
            ShellCommand::ShowAllVideos => {
                writeln!(out, "Here's a list of all available videos:")?;
                for video in player.all_videos_sorted() {
                    writeln!(out, "\t{}", video_line(video))?;
                }
            }
            ShellCommand::Play(id) => {
                let result = player.play(&id);
                report_play(out, player, result)?;
            }
            ShellCommand::PlayRandom => {
                let result = player.play_random();
                report_play(out, player, result)?;
            }
            ShellCommand::Stop => match player.stop() {
                Ok(id) => writeln!(out, "Stopping video: {}", title_of(player, &id))?,
                Err(err) => writeln!(out, "{}", cannot("Cannot stop video", &err))?,
            },
            ShellCommand::Pause => match player.pause() {
                Ok(PauseOutcome::Paused(id)) => {
                    writeln!(out, "Pausing video: {}", title_of(player, &id))?
                }
                Ok(PauseOutcome::AlreadyPaused(id)) => {
                    writeln!(out, "Video already paused: {}", title_of(player, &id))?
                }
                Err(err) => writeln!(out, "{}", cannot("Cannot pause video", &err))?,
            },
            ShellCommand::Continue => match player.resume() {
                Ok(id) => writeln!(out, "Continuing video: {}", title_of(player, &id))?,
                Err(err) => writeln!(out, "{}", cannot("Cannot continue video", &err))?,
            },
            ShellCommand::ShowPlaying => match player.current() {
                Some((video, paused)) => writeln!(
                    out,
                    "Currently playing: {}{}",
                    video_line(video),
                    if paused { " - PAUSED" } else { "" }
                )?,
                None => writeln!(out, "No video is currently playing")?,
            },
            ShellCommand::CreatePlaylist(name) => match player.create_playlist(&name) {
                Ok(playlist) => writeln!(
                    out,
                    "Successfully created new playlist: {}",
                    playlist.title()
                )?,
                Err(err) => writeln!(out, "{}", cannot("Cannot create playlist", &err))?,
            },
            ShellCommand::AddToPlaylist { playlist, video } => {
                match player.add_to_playlist(&playlist, &video) {
                    Ok(video) => {
                        writeln!(out, "Added video to {}: {}", playlist, video.title())?
                    }
                    Err(err) => writeln!(
                        out,
                        "{}",
                        cannot(&format!("Cannot add video to {}", playlist), &err)
                    )?,
                }
            }
            ShellCommand::RemoveFromPlaylist { playlist, video } => {
                match player.remove_from_playlist(&playlist, &video) {
                    Ok(video) => {
                        writeln!(out, "Removed video from {}: {}", playlist, video.title())?
                    }
                    Err(err) => writeln!(
                        out,
                        "{}",
                        cannot(&format!("Cannot remove video from {}", playlist), &err)
                    )?,
                }
            }
            ShellCommand::ClearPlaylist(name) => match player.clear_playlist(&name) {
                Ok(()) => writeln!(out, "Successfully removed all videos from {}", name)?,
                Err(err) => writeln!(
                    out,
                    "{}",
                    cannot(&format!("Cannot clear playlist {}", name), &err)
                )?,
            },
            ShellCommand::DeletePlaylist(name) => match player.delete_playlist(&name) {
                Ok(()) => writeln!(out, "Deleted playlist: {}", name)?,
                Err(err) => writeln!(
                    out,
                    "{}",
                    cannot(&format!("Cannot delete playlist {}", name), &err)
                )?,
            },
            ShellCommand::ShowPlaylist(name) => match player.playlist_videos(&name) {
                Ok(videos) => {
                    writeln!(out, "Showing playlist: {}", name)?;
                    if videos.is_empty() {
                        writeln!(out, "\tNo videos here yet")?;
                    }
                    for video in videos {
                        writeln!(out, "\t{}", video_line(video))?;
                    }
                }
                Err(err) => writeln!(
                    out,
                    "{}",
                    cannot(&format!("Cannot show playlist {}", name), &err)
                )?,
            },
            ShellCommand::ShowAllPlaylists => {
                let playlists = player.playlists().list();
                if playlists.is_empty() {
                    writeln!(out, "No playlists exist yet")?;
                } else {
                    writeln!(out, "Showing all playlists:")?;
                    for playlist in playlists {
                        writeln!(out, "\t{}", playlist.title())?;
                    }
                }
            }
            ShellCommand::SearchVideos(term) => {
                let results: Vec<VideoId> = player
                    .search_titles(&term)
                    .into_iter()
                    .map(|v| v.id().clone())
                    .collect();
                offer_results(player, input, out, &term, &results)?;
            }
            ShellCommand::SearchVideosWithTag(tag) => {
                let results: Vec<VideoId> = player
                    .search_tag(&tag)
                    .into_iter()
                    .map(|v| v.id().clone())
                    .collect();
                offer_results(player, input, out, &tag, &results)?;
            }
            ShellCommand::FlagVideo { video, reason } => {
                match player.flag(&video, reason.as_deref()) {
                    Ok(applied) => {
                        let title = title_of(player, &applied.id);
                        if applied.stopped_playback {
                            writeln!(out, "Stopping video: {}", title)?;
                        }
                        writeln!(
                            out,
                            "Successfully flagged video: {} (reason: {})",
                            title, applied.reason
                        )?;
                    }
                    Err(err) => writeln!(out, "{}", cannot("Cannot flag video", &err))?,
                }
            }
            ShellCommand::AllowVideo(id) => match player.allow(&id) {
                Ok(video) => writeln!(
                    out,
                    "Successfully removed flag from video: {}",
                    video.title()
                )?,
                Err(err) => writeln!(out, "{}", cannot("Cannot remove flag from video", &err))?,
            },
            ShellCommand::Help => writeln!(out, "{}", HELP_TEXT)?,
            ShellCommand::Exit => {}
        }

        Ok(())
    }
}

fn title_of<'a>(player: &'a Player, id: &VideoId) -> &'a str {
    player.video(id.as_str()).map(|v| v.title()).unwrap_or("")
}

fn report_play<W: Write>(
    out: &mut W,
    player: &Player,
    result: PlayerResult<PlayStarted>,
) -> Result<()> {
    match result {
        Ok(started) => {
            if let Some(ref previous) = started.stopped {
                writeln!(out, "Stopping video: {}", title_of(player, previous))?;
            }
            writeln!(out, "Playing video: {}", title_of(player, &started.playing))?;
        }
        Err(PlayerError::NoneAvailable) => {
            writeln!(out, "{}", reason(&PlayerError::NoneAvailable))?
        }
        Err(err) => writeln!(out, "{}", cannot("Cannot play video", &err))?,
    }
    Ok(())
}

/// Print numbered results and play the one picked on the next input line.
/// Anything that is not a listed number is taken as "no".
fn offer_results<R: BufRead, W: Write>(
    player: &mut Player,
    input: &mut R,
    out: &mut W,
    term: &str,
    results: &[VideoId],
) -> Result<()> {
    if results.is_empty() {
        writeln!(out, "No search results for {}", term)?;
        return Ok(());
    }

    writeln!(out, "Here are the results for {}:", term)?;
    for (index, id) in results.iter().enumerate() {
        if let Some(video) = player.video(id.as_str()) {
            writeln!(out, "\t{}) {}", index + 1, video_line(video))?;
        }
    }
    writeln!(
        out,
        "Would you like to play any of the above? If yes, specify the number of the video."
    )?;
    writeln!(
        out,
        "If your answer is not a valid number, we will assume it's a no."
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let chosen = answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| results.get(index));

    if let Some(id) = chosen {
        let result = player.play(id.as_str());
        report_play(out, player, result)?;
    }

    Ok(())
}
