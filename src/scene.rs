//! Scene assembly
//!
//! Wires the game's paddles and ball, plus one background layer, into a
//! compositor and drives them one step at a time.

use crate::color::Rgba;
use crate::consts::BACKGROUND_Z;
use crate::draw::{HslWheel, Layer, Sinusoid, shared};
use crate::error::FieldError;
use crate::field::Field;
use crate::renderer::Compositor;
use crate::settings::{Background, Settings};
use crate::sim::{GamePhase, GameState, TickInput, tick};

#[derive(Debug)]
pub struct Scene {
    game: GameState,
    compositor: Compositor,
    background: Background,
}

impl Scene {
    pub fn new(settings: &Settings) -> Result<Self, FieldError> {
        Self::build(settings.field()?, settings.background, settings.seed)
    }

    pub fn build(field: Field, background: Background, seed: u64) -> Result<Self, FieldError> {
        let game = GameState::new(field, seed)?;
        let mut compositor = Compositor::new(field);

        if let Some(layer) = background_layer(&field, background) {
            compositor.add(layer);
        }
        for layer in game.layers() {
            compositor.add(layer);
        }

        log::info!(
            "Scene ready: {} positions, {} background, {} layers",
            field.width(),
            background,
            compositor.len()
        );

        Ok(Self {
            game,
            compositor,
            background,
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    pub fn background(&self) -> Background {
        self.background
    }

    /// Apply input, then animate all layers by `dt` seconds.
    /// Nothing moves while the game is paused.
    pub fn step(&mut self, input: &TickInput, dt: f64) {
        tick(&mut self.game, input);

        if self.game.phase == GamePhase::Paused {
            return;
        }
        if dt <= 0.0 || !dt.is_finite() {
            log::warn!("Ignoring non-positive frame time {dt}");
            return;
        }
        self.compositor.advance(dt);
    }

    pub fn render(&self) -> Vec<Rgba> {
        self.compositor.render_frame()
    }

    pub fn render_into(&self, frame: &mut [Rgba]) {
        self.compositor.render_into(frame);
    }
}

fn background_layer(field: &Field, background: Background) -> Option<Layer> {
    match background {
        Background::None => None,
        Background::Sinusoid { tabulated: false } => Some(shared(Sinusoid::new(field, BACKGROUND_Z))),
        Background::Sinusoid { tabulated: true } => {
            Some(shared(Sinusoid::tabulated(field, BACKGROUND_Z)))
        }
        Background::HslWheel => Some(shared(HslWheel::new(field, BACKGROUND_Z))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Drawable, Side};

    fn scene(background: Background) -> Scene {
        Scene::build(Field::new(20).unwrap(), background, 5).unwrap()
    }

    #[test]
    fn test_layer_count() {
        let bare = scene(Background::None);
        assert_eq!(bare.background(), Background::None);
        assert_eq!(bare.compositor().len(), 3);

        let wheel = scene(Background::HslWheel);
        assert_eq!(wheel.background(), Background::HslWheel);
        assert_eq!(wheel.compositor().len(), 4);
    }

    #[test]
    fn test_ball_drawn_over_background() {
        let scene = scene(Background::HslWheel);
        let ball = scene.game().ball.borrow().position() as usize;
        // Ball sits at 9.5: the two neighbours get half-strength white over the wheel
        assert_eq!(ball, 9);
        let frame = scene.render();
        let wheel = HslWheel::new(&Field::new(20).unwrap(), 0);
        assert_ne!(frame[9], wheel.color_at(9.0, Rgba::TRANSPARENT));
        assert_eq!(frame[0], wheel.color_at(0.0, Rgba::TRANSPARENT));
    }

    #[test]
    fn test_paused_scene_is_frozen() {
        let mut scene = scene(Background::Sinusoid { tabulated: true });
        let launch = TickInput {
            launch: true,
            ..Default::default()
        };
        scene.step(&launch, 0.1);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        scene.step(&pause, 0.1);
        let frozen = scene.render();
        let position = scene.game().ball.borrow().position();

        for _ in 0..10 {
            scene.step(&TickInput::default(), 0.1);
        }
        assert_eq!(scene.render(), frozen);
        assert_eq!(scene.game().ball.borrow().position(), position);
    }

    #[test]
    fn test_serve_moves_ball() {
        let mut scene = scene(Background::None);
        let launch = TickInput {
            launch: true,
            ..Default::default()
        };
        scene.step(&launch, 0.3);
        let ball = scene.game().ball.borrow();
        assert!((ball.position() - 9.5).abs() > 1.0);
    }

    #[test]
    fn test_pressed_paddle_shows() {
        let mut scene = scene(Background::None);
        let input = TickInput {
            right_pressed: true,
            ..Default::default()
        };
        scene.step(&input, 0.01);
        assert!(scene.game().player(Side::Right).borrow().is_visible());

        let frame = scene.render();
        assert_eq!(frame[0], Rgba::TRANSPARENT);
        assert_eq!(frame[19], Rgba::new(0, 199, 0, 200));
    }
}
