// ============================================================================
// timebar-core/src/session.rs
// ============================================================================
//
// SESSION: Control Surface and Ticker Thread
//
// A Session owns one ProgressionEngine behind a mutex. A background ticker
// thread calls tick() once per period; every control call locks the same
// mutex, so each transition runs to completion before the next one starts.
//
// AI-ASSISTANT-INFO: Threaded driver for the progression engine

// ---- Standard library imports ----
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

// ---- External crate imports ----
use log::{debug, info};

// ---- Internal crate imports ----
use crate::agenda::{Agenda, AgendaLibrary};
use crate::config::CoreConfig;
use crate::engine::{ProgressSnapshot, ProgressionEngine};
use crate::error::{CoreError, CoreResult};
use crate::events::EventHandler;

// ============================================================================
// SCHEDULERS
// ============================================================================

/// Paces the ticker thread.
pub trait TickScheduler: Send + Sync {
    /// Blocks until the next tick of a clock with the given period is due.
    fn wait(&self, period: Duration);
}

/// Ticks at wall-clock speed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeScheduler;

impl TickScheduler for RealTimeScheduler {
    fn wait(&self, period: Duration) {
        thread::sleep(period);
    }
}

/// Ticks `speed` times faster than wall-clock time. Each tick still counts
/// as one full period of agenda time.
#[derive(Debug, Clone, Copy)]
pub struct AcceleratedScheduler {
    speed: f64,
}

impl AcceleratedScheduler {
    pub fn new(speed: f64) -> CoreResult<Self> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(CoreError::Config(format!(
                "speed factor must be a positive number, got {speed}"
            )));
        }
        Ok(Self { speed })
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }
}

impl TickScheduler for AcceleratedScheduler {
    fn wait(&self, period: Duration) {
        thread::sleep(period.div_f64(self.speed));
    }
}

// ============================================================================
// TICKER
// ============================================================================

fn lock_engine(engine: &Mutex<ProgressionEngine>) -> MutexGuard<'_, ProgressionEngine> {
    match engine.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    fn spawn(
        engine: Arc<Mutex<ProgressionEngine>>,
        scheduler: Arc<dyn TickScheduler>,
        period: Duration,
    ) -> CoreResult<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("timebar-ticker".to_string())
            .spawn(move || {
                while !thread_stop.load(Ordering::SeqCst) {
                    scheduler.wait(period);
                    if thread_stop.load(Ordering::SeqCst) {
                        break;
                    }
                    lock_engine(&engine).tick();
                }
                debug!("Ticker thread exiting");
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    fn stop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Control surface of a running countdown.
pub struct Session {
    engine: Arc<Mutex<ProgressionEngine>>,
    library: AgendaLibrary,
    scheduler: Arc<dyn TickScheduler>,
    tick_period: Duration,
    ticker: Option<Ticker>,
}

impl Session {
    /// Creates a session ticking in real time.
    pub fn new(config: CoreConfig) -> CoreResult<Self> {
        Self::with_scheduler(config, Arc::new(RealTimeScheduler))
    }

    /// Creates a session whose ticker is paced by `scheduler`.
    pub fn with_scheduler(
        config: CoreConfig,
        scheduler: Arc<dyn TickScheduler>,
    ) -> CoreResult<Self> {
        let library = AgendaLibrary::new(config.agenda_dir.clone());
        let tick_period = Duration::from_millis(config.tick_ms);
        let engine = ProgressionEngine::new(config)?;
        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
            library,
            scheduler,
            tick_period,
            ticker: None,
        })
    }

    pub fn library(&self) -> &AgendaLibrary {
        &self.library
    }

    pub fn add_handler(&self, handler: Arc<dyn EventHandler>) {
        self.with_engine(|engine| engine.add_handler(handler));
    }

    /// Loads the agenda called `name` from the library and installs it.
    ///
    /// On failure the current agenda and its progression are left untouched.
    pub fn load_agenda(&mut self, name: &str) -> CoreResult<()> {
        let agenda = self.library.load(name)?;
        self.install(agenda)
    }

    /// Installs an agenda, restarting the ticker when there is time to count.
    pub fn install(&mut self, agenda: Agenda) -> CoreResult<()> {
        self.stop();

        let finished = self.with_engine(|engine| {
            engine.install(agenda);
            engine.is_finished()
        });

        if finished {
            info!("Agenda has no duration; clock not started");
            return Ok(());
        }

        self.ticker = Some(Ticker::spawn(
            Arc::clone(&self.engine),
            Arc::clone(&self.scheduler),
            self.tick_period,
        )?);
        debug!("Ticker started with a {:?} period", self.tick_period);
        Ok(())
    }

    pub fn toggle_start_pause(&self, force: Option<bool>) {
        self.with_engine(|engine| engine.toggle_start_pause(force));
    }

    pub fn previous_step(&self) {
        self.with_engine(ProgressionEngine::previous_step);
    }

    pub fn next_step(&self) {
        self.with_engine(ProgressionEngine::next_step);
    }

    pub fn go_to_step(&self, target: usize, force: bool) {
        self.with_engine(|engine| engine.go_to_step(target, force));
    }

    pub fn restart(&self) {
        self.with_engine(ProgressionEngine::restart);
    }

    pub fn set_sound_enabled(&self, enabled: bool) {
        self.with_engine(|engine| engine.set_sound_enabled(enabled));
    }

    pub fn sound_enabled(&self) -> bool {
        self.with_engine(|engine| engine.sound_enabled())
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.with_engine(|engine| engine.snapshot())
    }

    pub fn is_finished(&self) -> bool {
        self.with_engine(|engine| engine.is_finished())
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Stops the ticker thread. The engine keeps its state.
    pub fn stop(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
            debug!("Ticker stopped");
        }
    }

    /// Runs `f` with the engine locked.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut ProgressionEngine) -> R) -> R {
        let mut engine = lock_engine(&self.engine);
        f(&mut engine)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}
