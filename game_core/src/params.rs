/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 1024.0;
    pub const ARENA_HEIGHT: f32 = 768.0;

    // Paddle
    pub const PADDLE_THICKNESS: f32 = 10.0;
    pub const PADDLE_SIZE: f32 = 100.0;
    pub const PADDLE_ACCEL: f32 = 1000.0; // px/s per unit of command
    pub const PADDLE_MAX_SPEED: f32 = 800.0;
    pub const PADDLE_INSET: f32 = 15.0; // paddle centre distance from the side

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;
    pub const BALL_SPEED: f32 = 800.0; // after a paddle hit; serves go at half
    pub const MAX_ANGLE_VARIATION: f32 = 45.0; // degrees
    pub const SERVE_SPREAD: f32 = 0.785; // ~45°

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1;
}
