//! Strip Pong entry point
//!
//! Runs the scene at a fixed timestep and streams frames to the terminal,
//! standing in for the LED driver.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;
    use std::thread;
    use std::time::{Duration, Instant};

    use clap::Parser;

    use strip_pong::renderer::{AnsiSink, FrameSink};
    use strip_pong::sim::{FrameClock, TickInput};
    use strip_pong::{Background, Rgba, Scene, Settings};

    #[derive(Parser, Debug, Clone)]
    #[command(name = "strip-pong")]
    #[command(about = "One-dimensional Pong on an LED strip, drawn in the terminal", long_about = None)]
    pub struct Cli {
        /// JSON settings file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Strip length in LEDs (overrides the settings file)
        #[arg(short, long)]
        pub width: Option<u32>,

        /// Background effect: none, sinusoid, sinusoid-table, hsl
        #[arg(short, long)]
        pub background: Option<Background>,

        /// Serve RNG seed
        #[arg(long)]
        pub seed: Option<u64>,

        /// Stop after this many rendered frames (runs forever if omitted)
        #[arg(short, long)]
        pub frames: Option<u64>,

        /// Do not draw frames, only log
        #[arg(long = "no-terminal", default_value = "false")]
        pub no_terminal: bool,
    }

    impl Cli {
        fn settings(&self) -> Result<Settings, Box<dyn Error>> {
            let mut settings = match &self.config {
                Some(path) => Settings::load(path)?,
                None => Settings::default(),
            };

            if let Some(width) = self.width {
                settings.width = width;
            }
            if let Some(background) = self.background {
                settings.background = background;
            }
            if let Some(seed) = self.seed {
                settings.seed = seed;
            }
            if self.no_terminal {
                settings.terminal = false;
            }
            settings.field()?;

            Ok(settings)
        }
    }

    /// Game instance: scene, timing and the reusable frame buffer
    struct Game {
        scene: Scene,
        clock: FrameClock,
        input: TickInput,
        frame: Vec<Rgba>,
        rendered: u64,
    }

    impl Game {
        fn new(settings: &Settings) -> Result<Self, Box<dyn Error>> {
            let scene = Scene::new(settings)?;
            let width = scene.compositor().field().width() as usize;

            Ok(Self {
                scene,
                clock: FrameClock::new(settings.frame_rate),
                input: TickInput {
                    idle_mode: settings.idle_mode,
                    launch: !settings.idle_mode,
                    ..Default::default()
                },
                frame: vec![Rgba::TRANSPARENT; width],
                rendered: 0,
            })
        }

        /// Run simulation steps for `dt` seconds of wall time
        fn update(&mut self, dt: f64) {
            let step = self.clock.step();
            for _ in 0..self.clock.substeps(dt) {
                self.scene.step(&self.input, step);

                // Clear one-shot inputs after processing
                self.input.launch = false;
                self.input.pause = false;
            }
        }

        fn render(&mut self, sink: Option<&mut dyn FrameSink>) -> io::Result<()> {
            self.scene.render_into(&mut self.frame);
            self.rendered += 1;

            match sink {
                Some(sink) => sink.write_frame(&self.frame),
                None => {
                    if self.rendered % 60 == 0 {
                        let game = self.scene.game();
                        log::info!(
                            "frame {} ({}): ball at {:.2}",
                            self.rendered,
                            game.phase.as_str(),
                            game.ball.borrow().position()
                        );
                    }
                    Ok(())
                }
            }
        }
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        env_logger::init();

        let cli = Cli::parse();
        let settings = cli.settings()?;
        log::info!("Strip Pong starting: {settings:?}");

        let mut game = Game::new(&settings)?;
        let mut sink = settings.terminal.then(|| AnsiSink::new(io::stdout()));

        let frame_time = Duration::from_secs_f64(1.0 / settings.frame_rate.max(1) as f64);
        let mut last = Instant::now();

        while cli.frames.is_none_or(|limit| game.rendered < limit) {
            let now = Instant::now();
            game.update(now.duration_since(last).as_secs_f64());
            last = now;

            game.render(sink.as_mut().map(|s| s as &mut dyn FrameSink))?;

            if let Some(rest) = frame_time.checked_sub(now.elapsed()) {
                thread::sleep(rest);
            }
        }

        log::info!(
            "Rendered {} frames, {} serves",
            game.rendered,
            game.scene.game().serves
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No terminal on wasm; embedders drive `Scene` directly
}
