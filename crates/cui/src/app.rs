use anyhow::Result;
use roshambo_core::{Event, EventBus, GameConfig, Move, Session, SessionError};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const DEFAULT_SESSION_SEED: u64 = 0xC0FFEE;
const MAX_EVENT_LOG: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Moves,
    History,
    Events,
}

/// Explicit cancellable handle for the auto-play timer. Dropping it stops
/// the loop; there is no ambient interval id anywhere.
#[derive(Debug)]
pub struct AutoPlayHandle {
    period: Duration,
    next_fire: Instant,
}

impl AutoPlayHandle {
    fn new(period: Duration) -> Self {
        Self {
            period,
            next_fire: Instant::now() + period,
        }
    }

    fn due(&self, now: Instant) -> bool {
        now >= self.next_fire
    }

    fn rearm(&mut self, now: Instant) {
        self.next_fire = now + self.period;
    }
}

pub struct App {
    pub seed: u64,
    pub session: Session,
    pub events: EventBus,
    pub auto_play: Option<AutoPlayHandle>,
    pub focus: FocusPane,
    pub moves_cursor: usize,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(seed: u64) -> Result<Self> {
        let session = Session::new(GameConfig::default(), seed);
        Ok(Self {
            seed,
            session,
            events: EventBus::default(),
            auto_play: None,
            focus: FocusPane::Moves,
            moves_cursor: 0,
            event_log: VecDeque::new(),
            status_line: "make your move".to_string(),
            show_help: false,
            should_quit: false,
        })
    }

    /// Replays a scripted move list before handing over interactive control.
    pub fn apply_scripted_moves(&mut self, moves: &[Move]) {
        for mv in moves {
            self.session.play_move(*mv, &mut self.events);
        }
        if !moves.is_empty() {
            self.push_status(format!("replayed {} scripted rounds", moves.len()));
        }
        self.flush_events();
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        let due = self
            .auto_play
            .as_ref()
            .map(|handle| handle.due(now))
            .unwrap_or(false);
        if !due {
            return;
        }
        // Auto-play simulates both sides: a fresh random player move per tick.
        let player = self.session.rng.draw_move();
        let record = self.session.play_move(player, &mut self.events);
        self.push_status(format!(
            "auto: {} vs {} - {}",
            record.player.label(),
            record.computer.label(),
            record.outcome.label()
        ));
        if let Some(handle) = self.auto_play.as_mut() {
            handle.rearm(now);
        }
        self.flush_events();
    }

    pub fn auto_playing(&self) -> bool {
        self.auto_play.is_some()
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = match (self.focus, forward) {
            (FocusPane::Moves, true) => FocusPane::History,
            (FocusPane::History, true) => FocusPane::Events,
            (FocusPane::Events, true) => FocusPane::Moves,
            (FocusPane::Moves, false) => FocusPane::Events,
            (FocusPane::History, false) => FocusPane::Moves,
            (FocusPane::Events, false) => FocusPane::History,
        };
    }

    pub fn move_cursor(&mut self, down: bool) {
        if self.focus != FocusPane::Moves {
            return;
        }
        let len = Move::ALL.len();
        if down {
            self.moves_cursor = (self.moves_cursor + 1) % len;
        } else {
            self.moves_cursor = (self.moves_cursor + len - 1) % len;
        }
    }

    pub fn select_at_cursor(&mut self) {
        self.select_move(Move::ALL[self.moves_cursor.min(Move::ALL.len() - 1)]);
    }

    pub fn select_move(&mut self, mv: Move) {
        if self.auto_playing() {
            self.push_status("auto-play is running; stop it first");
            return;
        }
        self.moves_cursor = Move::ALL.iter().position(|m| *m == mv).unwrap_or(0);
        self.session.select_move(mv, &mut self.events);
        self.push_status(format!("selected {}", mv.label()));
        self.flush_events();
    }

    pub fn play_round(&mut self) {
        if self.auto_playing() {
            self.push_status("auto-play is running; stop it first");
            return;
        }
        match self.session.play_round(&mut self.events) {
            Ok(record) => {
                self.push_status(format!(
                    "{} vs {} - {}",
                    record.player.label(),
                    record.computer.label(),
                    record.outcome.label()
                ));
            }
            Err(err) => self.push_error(err),
        }
        self.flush_events();
    }

    pub fn toggle_auto_play(&mut self) {
        if self.auto_play.is_some() {
            self.stop_auto_play();
        } else {
            self.start_auto_play();
        }
    }

    pub fn start_auto_play(&mut self) {
        if self.auto_play.is_some() {
            return;
        }
        let period_ms = self.session.config.auto_play_period_ms;
        self.auto_play = Some(AutoPlayHandle::new(Duration::from_millis(period_ms)));
        self.events.push(Event::AutoPlayStarted { period_ms });
        self.push_status("auto-play started");
        self.flush_events();
    }

    /// Idempotent: stopping when not running is a no-op.
    pub fn stop_auto_play(&mut self) {
        if self.auto_play.take().is_none() {
            return;
        }
        self.events.push(Event::AutoPlayStopped);
        self.push_status("auto-play stopped");
        self.flush_events();
    }

    pub fn reset_session(&mut self) {
        self.stop_auto_play();
        self.session.reset(&mut self.events);
        self.moves_cursor = 0;
        self.push_status("session reset");
        self.flush_events();
    }

    pub fn push_status(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
    }

    pub fn push_error(&mut self, err: SessionError) {
        self.status_line = format!("error: {err}");
    }

    fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            self.push_event_line(format_event(&event));
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

fn format_event(event: &Event) -> String {
    match event {
        Event::MoveSelected { player } => format!("selected {}", player.label()),
        Event::RoundResolved {
            round,
            player,
            computer,
            outcome,
            player_score,
            computer_score,
        } => format!(
            "round {round}: {} {} vs {} {} -> {} ({player_score}-{computer_score})",
            player.icon(),
            player.label(),
            computer.icon(),
            computer.label(),
            outcome.label()
        ),
        Event::SessionReset => "session reset".to_string(),
        Event::AutoPlayStarted { period_ms } => {
            format!("auto-play started ({period_ms}ms period)")
        }
        Event::AutoPlayStopped => "auto-play stopped".to_string(),
    }
}
