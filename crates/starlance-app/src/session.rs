//! Session loop — runs the engine and renderer at the host frame rate.
//!
//! One thread owns the `GameCore` and drives it until shutdown.
//! Pointer/keyboard handlers only overwrite the latest-value input
//! slot; the loop reads it once per frame, so input lands atomically
//! at frame boundaries. Control commands arrive over an mpsc channel,
//! shell events flow back over another. Dropping the `Session` handle
//! stops the loop: no recurring work outlives it.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use starlance_core::commands::ShellCommand;
use starlance_core::enums::SessionPhase;
use starlance_core::events::ShellEvent;
use starlance_core::input::{InputState, KeyFlags};
use starlance_core::mission::MissionParameters;
use starlance_render::Surface;
use starlance_sim::{GameCore, SimConfig};

/// The host's render destination: a drawing surface plus its current
/// pixel size, re-read every frame so window resizes apply on the
/// next render.
pub trait FrameTarget: Send + 'static {
    fn size(&self) -> (f32, f32);
    fn surface(&mut self) -> &mut dyn Surface;
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub seed: u64,
    pub mission: MissionParameters,
    /// Frames per second the loop paces itself to.
    pub frame_rate: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mission: MissionParameters::fallback(),
            frame_rate: 60,
        }
    }
}

enum LoopCommand {
    Shell(ShellCommand),
    Shutdown,
}

/// Handle to a running session loop.
pub struct Session {
    command_tx: mpsc::Sender<LoopCommand>,
    input_slot: Arc<Mutex<InputState>>,
    event_rx: mpsc::Receiver<ShellEvent>,
    handle: Option<JoinHandle<()>>,
}

impl Session {
    /// Spawn the session loop on its own thread.
    pub fn spawn<T: FrameTarget>(config: SessionConfig, target: T) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
        let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
        let input_slot = Arc::new(Mutex::new(InputState::default()));
        let slot = Arc::clone(&input_slot);

        let handle = thread::Builder::new()
            .name("starlance-session".into())
            .spawn(move || run_session_loop(config, target, command_rx, &slot, &event_tx))
            .expect("failed to spawn session loop thread");

        Self {
            command_tx,
            input_slot,
            event_rx,
            handle: Some(handle),
        }
    }

    /// Overwrite the pointer slot. Called from the host's pointer
    /// handlers; never touches simulation state directly.
    pub fn set_pointer(&self, x: f32, y: f32, active: bool) {
        if let Ok(mut input) = self.input_slot.lock() {
            input.pointer = glam::Vec2::new(x, y);
            input.pointer_active = active;
        }
    }

    /// Overwrite the keyboard state map.
    pub fn set_keys(&self, keys: KeyFlags) {
        if let Ok(mut input) = self.input_slot.lock() {
            input.keys = keys;
        }
    }

    pub fn pause(&self) {
        let _ = self.command_tx.send(LoopCommand::Shell(ShellCommand::Pause));
    }

    pub fn resume(&self) {
        let _ = self.command_tx.send(LoopCommand::Shell(ShellCommand::Resume));
    }

    /// Drain shell events received since the last poll.
    pub fn poll_events(&self) -> Vec<ShellEvent> {
        self.event_rx.try_iter().collect()
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The session loop. Runs until Shutdown or channel disconnect.
fn run_session_loop<T: FrameTarget>(
    config: SessionConfig,
    mut target: T,
    command_rx: mpsc::Receiver<LoopCommand>,
    input_slot: &Mutex<InputState>,
    event_tx: &mpsc::Sender<ShellEvent>,
) {
    let mut core = GameCore::new(SimConfig {
        seed: config.seed,
        mission: config.mission,
    });
    log::info!("session started: \"{}\"", core.mission().title);

    let frame_duration = Duration::from_nanos(1_000_000_000 / config.frame_rate.max(1) as u64);
    let mut next_frame_time = Instant::now();
    let mut last_frame: Option<Instant> = None;
    let mut prev_keys = KeyFlags::empty();

    loop {
        // 1. Drain all pending commands.
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Shell(command)) => core.queue_command(command),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Read the input slot once; a pause-key edge becomes a
        //    pause/resume command.
        let input = input_slot.lock().map(|slot| *slot).unwrap_or_default();
        if input.keys.contains(KeyFlags::PAUSE) && !prev_keys.contains(KeyFlags::PAUSE) {
            match core.phase() {
                SessionPhase::Playing => core.queue_command(ShellCommand::Pause),
                SessionPhase::Paused => core.queue_command(ShellCommand::Resume),
                SessionPhase::Ended => {}
            }
        }
        prev_keys = input.keys;

        // 3. Advance one frame (the engine zeroes dt on the first
        //    frame and after resume).
        let now = Instant::now();
        let dt_ms = last_frame
            .map(|t| (now - t).as_secs_f32() * 1000.0)
            .unwrap_or(0.0);
        last_frame = Some(now);

        let (width, height) = target.size();
        let report = core.frame(input, dt_ms, width, height);

        // 4. Render every frame, paused or not.
        starlance_render::render(&core.scene(), target.surface(), width, height);

        // 5. Forward events to the shell.
        for event in report.events {
            if let ShellEvent::GameOver { final_score } = event {
                log::info!("mission failed, final score {final_score}");
            }
            if event_tx.send(event).is_err() {
                return;
            }
        }

        // 6. Sleep until the next frame boundary.
        next_frame_time += frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_duration * 2 {
            // Badly behind schedule; rebase rather than spiral.
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starlance_render::RecordingSurface;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTarget {
        surface: RecordingSurface,
        frames: Arc<AtomicUsize>,
    }

    impl FrameTarget for CountingTarget {
        fn size(&self) -> (f32, f32) {
            (320.0, 180.0)
        }

        fn surface(&mut self) -> &mut dyn Surface {
            self.frames.fetch_add(1, Ordering::SeqCst);
            self.surface.reset();
            &mut self.surface
        }
    }

    fn test_session(frames: &Arc<AtomicUsize>) -> Session {
        Session::spawn(
            SessionConfig {
                frame_rate: 240,
                ..SessionConfig::default()
            },
            CountingTarget {
                surface: RecordingSurface::new(),
                frames: Arc::clone(frames),
            },
        )
    }

    #[test]
    fn test_session_renders_frames_until_shutdown() {
        let frames = Arc::new(AtomicUsize::new(0));
        let session = test_session(&frames);

        session.set_pointer(0.1, -0.2, true);
        while frames.load(Ordering::SeqCst) < 5 {
            thread::sleep(Duration::from_millis(5));
        }
        session.shutdown();

        let rendered = frames.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(
            frames.load(Ordering::SeqCst),
            rendered,
            "no frames may render after shutdown"
        );
    }

    #[test]
    fn test_session_drop_stops_loop() {
        let frames = Arc::new(AtomicUsize::new(0));
        {
            let _session = test_session(&frames);
            while frames.load(Ordering::SeqCst) < 2 {
                thread::sleep(Duration::from_millis(5));
            }
        }
        let rendered = frames.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(frames.load(Ordering::SeqCst), rendered);
    }

    #[test]
    fn test_pause_and_resume_round_trip() {
        let frames = Arc::new(AtomicUsize::new(0));
        let session = test_session(&frames);
        while frames.load(Ordering::SeqCst) < 2 {
            thread::sleep(Duration::from_millis(5));
        }
        session.pause();
        session.resume();
        session.set_keys(KeyFlags::PAUSE);
        while frames.load(Ordering::SeqCst) < 8 {
            thread::sleep(Duration::from_millis(5));
        }
        session.shutdown();
    }
}
