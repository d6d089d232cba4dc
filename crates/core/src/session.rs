//! Game session module - one match on one lane
//!
//! A session seats its players, holds a lane for its whole lifetime and walks
//! frames 1 through 10. Within a frame players bowl in seat order. After the
//! tenth frame the lane goes back to the arena and the session is finished;
//! its players stay readable for the scoreboard.

use std::sync::Arc;

use log::{debug, info};

use crate::arena::{LaneArena, LaneLease};
use crate::error::{BowlingError, Result};
use crate::frame::Frame;
use crate::player::Player;
use crate::rng::PinRoll;
use crate::snapshot::Scoreboard;
use crate::types::{FrameNumber, FINISHED_FRAME};

/// A bowling match between a fixed roster of players
#[derive(Debug)]
pub struct GameSession {
    players: Vec<Player>,
    /// Frame about to be bowled, `FINISHED_FRAME` once the game is over.
    frame_number: u8,
    lease: Option<LaneLease>,
}

impl GameSession {
    /// Seat the players and take a lane from `arena`.
    ///
    /// The roster must hold at least one player and no blank names; a bad
    /// roster fails before any lane is taken. When every lane is busy this
    /// fails with [`BowlingError::CapacityExhausted`] and no session exists.
    pub fn create<I, S>(names: I, arena: &Arc<LaneArena>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<Player> = names.into_iter().map(Player::new).collect();
        if players.is_empty() {
            return Err(BowlingError::InvalidRoster("at least one player is required"));
        }
        if players.iter().any(|p| p.name().trim().is_empty()) {
            return Err(BowlingError::InvalidRoster("player names must not be empty"));
        }

        let lease = arena.lease()?;
        info!(
            "session started for {} player(s) ({}/{} lanes free)",
            players.len(),
            arena.available(),
            arena.capacity()
        );

        Ok(Self {
            players,
            frame_number: FrameNumber::FIRST.get(),
            lease: Some(lease),
        })
    }

    /// Frame about to be bowled (1-10), or 11 once finished
    pub fn frame_number(&self) -> u8 {
        self.frame_number
    }

    /// Frame about to be bowled, `None` once finished
    pub fn current_frame(&self) -> Option<FrameNumber> {
        FrameNumber::new(self.frame_number)
    }

    pub fn is_finished(&self) -> bool {
        self.frame_number == FINISHED_FRAME
    }

    /// Whether the session still holds its lane
    pub fn lane_held(&self) -> bool {
        self.lease.is_some()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// First player seated under `name`
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Bowl the current frame for every player, in seat order.
    ///
    /// Every player's frame is bowled before any of them is recorded, so a
    /// roll-source failure leaves the session exactly as it was. Bowling the
    /// tenth frame finishes the game and returns the lane.
    pub fn play_frame<R: PinRoll + ?Sized>(&mut self, source: &mut R) -> Result<FrameNumber> {
        let number = self.current_frame().ok_or(BowlingError::SessionFinished)?;

        let frames = self
            .players
            .iter()
            .map(|_| Frame::bowl(number, &mut *source))
            .collect::<Result<Vec<_>>>()?;

        for (player, frame) in self.players.iter_mut().zip(frames) {
            let score = player.record(frame);
            debug!(
                "{} frame {}: +{} = {}",
                player.name(),
                number,
                score.total,
                player.score()
            );
        }

        self.frame_number += 1;
        if number.is_final() {
            self.finish()?;
        }
        Ok(number)
    }

    /// Bowl every remaining frame and return the winners.
    pub fn run<R: PinRoll + ?Sized>(&mut self, source: &mut R) -> Result<Vec<&Player>> {
        while !self.is_finished() {
            self.play_frame(source)?;
        }
        Ok(self.winners())
    }

    /// Every player tied for the highest cumulative score
    pub fn winners(&self) -> Vec<&Player> {
        winners(&self.players)
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::new(&self.players, self.frame_number)
    }

    /// Hand the players over for reporting, dropping the session.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(lease) = self.lease.take() {
            let arena = Arc::clone(lease.arena());
            lease.release()?;
            info!(
                "session finished, winners: {} ({}/{} lanes free)",
                winners(&self.players)
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>()
                    .join(", "),
                arena.available(),
                arena.capacity()
            );
        }
        Ok(())
    }
}

/// Every player tied for the highest score among `players`
pub fn winners(players: &[Player]) -> Vec<&Player> {
    let Some(best) = players.iter().map(Player::score).max() else {
        return Vec::new();
    };
    players.iter().filter(|p| p.score() == best).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    fn arena(lanes: usize) -> Arc<LaneArena> {
        Arc::new(LaneArena::new(lanes))
    }

    #[test]
    fn test_create_takes_a_lane() {
        let arena = arena(2);
        let session = GameSession::create(["ann", "bob"], &arena).unwrap();
        assert_eq!(arena.available(), 1);
        assert!(session.lane_held());
        assert_eq!(session.frame_number(), 1);
        assert_eq!(session.players().len(), 2);
        assert!(session.players().iter().all(|p| p.score() == 0));
    }

    #[test]
    fn test_bad_roster_takes_no_lane() {
        let arena = arena(1);
        let empty: [&str; 0] = [];
        assert!(matches!(
            GameSession::create(empty, &arena),
            Err(BowlingError::InvalidRoster(_))
        ));
        assert!(matches!(
            GameSession::create(["ann", "  "], &arena),
            Err(BowlingError::InvalidRoster(_))
        ));
        assert_eq!(arena.available(), 1);
    }

    #[test]
    fn test_play_frame_advances_and_records() {
        let arena = arena(1);
        let mut session = GameSession::create(["ann", "bob"], &arena).unwrap();
        let mut rolls = ScriptedRolls::new([10, 4, 6]);

        assert_eq!(session.play_frame(&mut rolls).unwrap(), FrameNumber::FIRST);
        assert_eq!(session.frame_number(), 2);

        let ann = session.player("ann").unwrap();
        assert_eq!(ann.frames()[0].rolls(), &[10]);
        assert_eq!(ann.running_scores(), &[20]);

        let bob = session.player("bob").unwrap();
        assert_eq!(bob.frames()[0].rolls(), &[4, 6]);
        assert_eq!(bob.score(), 15);
    }

    #[test]
    fn test_failed_frame_commits_nothing() {
        let arena = arena(1);
        let mut session = GameSession::create(["ann", "bob"], &arena).unwrap();
        // ann bowls fine, bob's second roll is impossible.
        let mut rolls = ScriptedRolls::new([3, 4, 8, 5]);

        let err = session.play_frame(&mut rolls).unwrap_err();
        assert!(matches!(err, BowlingError::InvalidRoll { rolled: 5, .. }));
        assert_eq!(session.frame_number(), 1);
        assert!(session.players().iter().all(|p| p.frames().is_empty()));
        assert!(session.lane_held());
    }

    #[test]
    fn test_run_finishes_and_releases_lane() {
        let arena = arena(1);
        let mut session = GameSession::create(["solo"], &arena).unwrap();
        let mut gutter = |_: u8| -> Option<u8> { Some(0) };

        let winners: Vec<String> = session
            .run(&mut gutter)
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(winners, vec!["solo"]);
        assert!(session.is_finished());
        assert_eq!(session.frame_number(), FINISHED_FRAME);
        assert_eq!(session.current_frame(), None);
        assert!(!session.lane_held());
        assert_eq!(arena.available(), 1);

        assert_eq!(
            session.play_frame(&mut gutter),
            Err(BowlingError::SessionFinished)
        );
        assert_eq!(arena.available(), 1);
    }

    #[test]
    fn test_abandoned_session_returns_lane() {
        let arena = arena(1);
        let session = GameSession::create(["ann"], &arena).unwrap();
        assert_eq!(arena.available(), 0);
        let players = session.into_players();
        assert_eq!(players.len(), 1);
        assert_eq!(arena.available(), 1);
    }

    #[test]
    fn test_winners_include_ties() {
        let mut players = vec![Player::new("A"), Player::new("B"), Player::new("C")];
        let n = |n| FrameNumber::new(n).unwrap();
        players[0].record(Frame::from_rolls(n(1), &[10]).unwrap());
        players[1].record(Frame::from_rolls(n(1), &[4, 6]).unwrap());
        players[1].record(Frame::from_rolls(n(2), &[5, 0]).unwrap());
        players[2].record(Frame::from_rolls(n(1), &[9, 0]).unwrap());

        let names: Vec<&str> = winners(&players).iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(winners(&[]).is_empty());
    }
}
