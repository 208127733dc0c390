use glam::Vec2;
use hecs::World;
use tracing::{debug, info, trace, warn, Level};

use crate::controller::PaddleController;
use crate::{
    create_ball, create_paddle, step, Ball, Config, Events, GameError, GameRng, InputQueue,
    Paddle, PaddleIntent, Params, Pilot, Score, Time,
};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub score: Score,
    /// Player that reached the win score, or the leader at the tick limit
    pub winner: Option<u8>,
    pub ticks: u64,
    /// `true` when a player reached the win score
    pub decided: bool,
}

/// A headless game between two piloted paddles
pub struct Match {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub inputs: InputQueue,
    pub rng: GameRng,
    pub tick: u64,
}

impl Match {
    pub fn new(
        config: Config,
        left: PaddleController,
        right: PaddleController,
        seed: u64,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let centre = config.arena_height / 2.0;
        create_paddle(&mut world, 0, centre, left);
        create_paddle(&mut world, 1, centre, right);

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(config.ball_spawn(), config.ball_speed / 2.0, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Ok(Self {
            world,
            time: Time::default(),
            config,
            score: Score::new(),
            events: Events::new(),
            inputs: InputQueue::new(),
            rng,
            tick: 0,
        })
    }

    /// Start a fresh game with the same pilots; the rng carries on
    pub fn reset(&mut self) {
        let centre = self.config.arena_height / 2.0;
        for (_e, (paddle, intent)) in self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
            paddle.y = centre;
            paddle.velocity = 0.0;
            intent.command = 0.0;
        }

        let spawn = self.config.ball_spawn();
        let serve_speed = self.config.ball_speed / 2.0;
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(spawn, serve_speed, &mut self.rng);
        }

        self.time = Time::default();
        self.score = Score::new();
        self.events.clear();
        self.inputs.clear();
        self.tick = 0;
    }

    /// Hold a manual paddle's direction until the next tick
    pub fn push_input(&mut self, player_id: u8, direction: f32) {
        self.inputs.push_input(player_id, direction);
    }

    /// Advance one fixed step
    pub fn tick(&mut self) -> &Events {
        self.time.dt = Params::FIXED_DT;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.inputs,
            &mut self.rng,
        );
        self.tick += 1;

        if self.events.left_scored {
            info!(score = %self.score, tick = self.tick, "paddle 1 scored");
        }
        if self.events.right_scored {
            info!(score = %self.score, tick = self.tick, "paddle 2 scored");
        }
        if self.events.ball_hit_paddle {
            debug!(tick = self.tick, "ball returned");
        }
        if tracing::enabled!(Level::TRACE) {
            self.trace_paddles();
        }

        &self.events
    }

    /// Per-paddle state after a tick: command, ball offset, velocity and,
    /// for fuzzy pilots, the strongest term of each input
    fn trace_paddles(&self) {
        let Some(ball) = self.ball() else {
            return;
        };
        let commands = self.commands();

        for (_e, (paddle, pilot)) in self.world.query::<(&Paddle, &Pilot)>().iter() {
            let offset = (ball.pos.y - paddle.y) as f64;
            let velocity = paddle.velocity as f64;
            let command = commands.get(paddle.player_id as usize).copied().unwrap_or(0.0);
            let system = pilot.0.kind();
            let paddle_no = paddle.player_id + 1;

            match &pilot.0 {
                PaddleController::Fuzzy(fuzzy) => match fuzzy.explain(offset, velocity) {
                    Ok(explanation) => trace!(
                        tick = self.tick,
                        paddle = paddle_no,
                        %system,
                        command,
                        offset,
                        velocity,
                        terms = ?explanation.dominant_terms(),
                        output = explanation.inference.output,
                        "paddle state"
                    ),
                    Err(err) => warn!(%err, paddle = paddle_no, offset, velocity, "no explanation"),
                },
                PaddleController::Manual(manual) => trace!(
                    tick = self.tick,
                    paddle = paddle_no,
                    %system,
                    command,
                    held = manual.direction(),
                    offset,
                    velocity,
                    "paddle state"
                ),
                PaddleController::Crisp(_) => trace!(
                    tick = self.tick,
                    paddle = paddle_no,
                    %system,
                    command,
                    offset,
                    velocity,
                    "paddle state"
                ),
            }
        }
    }

    pub fn winner(&self) -> Option<u8> {
        self.config
            .win_score
            .and_then(|target| self.score.has_winner(target))
    }

    /// Tick until someone reaches the win score or `max_ticks` have run
    pub fn play(&mut self, max_ticks: u64) -> GameOutcome {
        while self.tick < max_ticks {
            self.tick();
            if let Some(winner) = self.winner() {
                return GameOutcome {
                    score: self.score,
                    winner: Some(winner),
                    ticks: self.tick,
                    decided: true,
                };
            }
        }

        debug!(ticks = self.tick, score = %self.score, "tick limit reached");
        GameOutcome {
            score: self.score,
            winner: self.score.leader(),
            ticks: self.tick,
            decided: false,
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, player_id: u8) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, paddle)| *paddle)
            .find(|paddle| paddle.player_id == player_id)
    }

    /// Last command each paddle's pilot issued, left then right
    pub fn commands(&self) -> [f32; 2] {
        let mut commands = [0.0; 2];
        for (_e, (paddle, intent)) in self.world.query::<(&Paddle, &PaddleIntent)>().iter() {
            if let Some(slot) = commands.get_mut(paddle.player_id as usize) {
                *slot = intent.command;
            }
        }
        commands
    }
}
