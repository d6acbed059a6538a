//! Engine host: the search isolated on its own thread.
//!
//! A recursive alpha-beta search is a CPU-bound, synchronous tree walk; run
//! on the caller's thread it would freeze whatever event loop lives there.
//! `EngineHost` owns one dedicated `engine-search` thread and a pair of
//! channels. Requests carry a FEN string and a fresh UUID; the reply is
//! paired back to the caller by that id. FEN is the only thing that crosses
//! the boundary — the worker reconstructs the position through the rules
//! library, so the caller's board object is never shared across threads.
//!
//! There is no cooperative cancellation. If the hard ceiling expires the
//! worker is presumed wedged: the host drops its channels, spawns a fresh
//! thread, and rejects the caller. The abandoned worker exits on its next
//! failing send. The ceiling (30 s) is far above the driver's own time
//! budget (3 s by default), so it only ever fires for a worker that has
//! genuinely stopped responding.
//!
//! Single-flight contract: one outstanding request at a time. Taking
//! `&mut self` makes issuing a second request before the first settles a
//! compile-time error rather than a runtime queue.

use crate::error::EngineError;
use crate::search::{Searcher, SearchLimits};
use crate::types::{Board, Move};
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Dead-host detector: how long the host waits for any reply before it
/// declares the worker wedged. Distinct from, and much larger than, the
/// search's own time budget.
pub const HARD_CEILING: Duration = Duration::from_secs(30);

struct Request {
    id: Uuid,
    fen: String,
    limits: SearchLimits,
}

struct Reply {
    id: Uuid,
    outcome: Result<Option<Move>, String>,
}

/// Owned handle to the search thread.
///
/// Created eagerly on construction; torn down and recreated whenever a
/// fault or ceiling timeout is detected. Replacement is an explicit
/// operation on this handle — there is no ambient global engine.
pub struct EngineHost {
    requests: Sender<Request>,
    replies: Receiver<Reply>,
    limits: SearchLimits,
    hard_ceiling: Duration,
    skill_level: u8,
}

impl EngineHost {
    /// Host with the default time budget and hard ceiling
    pub fn new() -> Self {
        Self::with_config(SearchLimits::default(), HARD_CEILING)
    }

    /// Host with explicit search limits and the default hard ceiling
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self::with_config(limits, HARD_CEILING)
    }

    /// Host with explicit search limits and hard ceiling
    pub fn with_config(limits: SearchLimits, hard_ceiling: Duration) -> Self {
        let (requests, replies) = spawn_worker();
        Self {
            requests,
            replies,
            limits,
            hard_ceiling,
            skill_level: 10,
        }
    }

    /// Difficulty hint, clamped to 0..=20.
    ///
    /// Accepted and recorded but deliberately not wired into the search
    /// budget: the primitives here play at one fixed strength. Callers that
    /// want scaling should map their difficulty to a time budget and build
    /// the host through [`EngineHost::with_limits`].
    pub fn set_skill_level(&mut self, level: u8) {
        self.skill_level = level.min(20);
        tracing::debug!(level = self.skill_level, "skill level hint recorded");
    }

    pub fn skill_level(&self) -> u8 {
        self.skill_level
    }

    /// Ask the engine for a move in `board`'s position.
    ///
    /// Returns `Ok(None)` when the position has no legal moves (the game is
    /// already over). The caller's board is serialized to FEN up front and
    /// never touched afterwards.
    pub fn find_best_move(&mut self, board: &Board) -> Result<Option<Move>, EngineError> {
        let id = Uuid::new_v4();
        let request = Request {
            id,
            fen: board.to_string(),
            limits: self.limits.clone(),
        };

        if self.requests.send(request).is_err() {
            // Worker died between requests; replace it and report the fault.
            self.respawn();
            return Err(EngineError::Fault("search thread is gone".into()));
        }

        let deadline = Instant::now() + self.hard_ceiling;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.replies.recv_timeout(remaining) {
                Ok(reply) if reply.id == id => {
                    return reply.outcome.map_err(EngineError::Fault);
                }
                Ok(stale) => {
                    // A reply for a request this host no longer waits on.
                    tracing::warn!(id = %stale.id, "discarding stale engine reply");
                }
                Err(RecvTimeoutError::Timeout) => {
                    tracing::warn!(
                        ceiling_ms = self.hard_ceiling.as_millis() as u64,
                        "engine unresponsive; replacing search thread"
                    );
                    self.respawn();
                    return Err(EngineError::HostTimeout(self.hard_ceiling));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    self.respawn();
                    return Err(EngineError::Fault("search thread died".into()));
                }
            }
        }
    }

    /// Replace the worker thread and both channels wholesale.
    fn respawn(&mut self) {
        let (requests, replies) = spawn_worker();
        self.requests = requests;
        self.replies = replies;
    }
}

impl Default for EngineHost {
    fn default() -> Self {
        Self::new()
    }
}

fn spawn_worker() -> (Sender<Request>, Receiver<Reply>) {
    let (req_tx, req_rx) = unbounded::<Request>();
    let (rep_tx, rep_rx) = unbounded::<Reply>();

    let spawned = thread::Builder::new()
        .name("engine-search".into())
        .spawn(move || worker_loop(req_rx, rep_tx));
    if let Err(e) = spawned {
        // Out of threads; the dead channel ends surface as a Fault on the
        // first request instead of panicking the caller here.
        tracing::error!(error = %e, "failed to spawn search thread");
    }

    (req_tx, rep_rx)
}

fn worker_loop(requests: Receiver<Request>, replies: Sender<Reply>) {
    for request in requests.iter() {
        let outcome = match Board::from_str(&request.fen) {
            Ok(board) => {
                let mut searcher = Searcher::new();
                let best = searcher.find_best_move(&board, &request.limits);
                let stats = searcher.stats();
                let best_str = best.map(|m| m.to_string()).unwrap_or_else(|| "-".into());
                tracing::info!(
                    id = %request.id,
                    depth = stats.depth.raw(),
                    nodes = stats.nodes,
                    time_ms = stats.time_ms,
                    nps = stats.nps(),
                    best = %best_str,
                    "search finished"
                );
                Ok(best)
            }
            Err(e) => Err(format!("rules library rejected position: {e}")),
        };

        let id = request.id;
        if replies.send(Reply { id, outcome }).is_err() {
            // Host replaced us while we were searching.
            tracing::debug!(id = %id, "host detached; search thread exiting");
            break;
        }
    }
}
