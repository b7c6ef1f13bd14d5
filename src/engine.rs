// src/engine.rs
//! MoveEngine: 1 tick ごとにポインター入力を受けて、盤面を書き換えるよ！
//!
//! 流れ:
//! 1. ポインターが押されていて、デバウンスの間隔を過ぎていれば「拾う」処理。
//! 2. ポインターが離れていて手札があれば「置く」処理 (だめなら元に戻す)。
//! 3. 最後にシステム (場札をめくる、勝利判定) を全部回す。

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::event_handler::{self, HitRegion, PointerInput};
use crate::app::{drag_handler, state_getter};
use crate::board::TableBoard;
use crate::components::game_state::GameState;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::logic::integrity;
use crate::protocol::{GameEvent, TickReport};
use crate::system::System;
use crate::systems::{DealInitialCardsSystem, RevealSystem, WinConditionSystem};

pub struct MoveEngine {
    state: GameState,
    config: EngineConfig,
    rng: StdRng,
    tick_count: u64,
    /// 最後にクリックを受け付けた tick。まだ一度も無ければ None。
    last_click_tick: Option<u64>,
    systems: Vec<Box<dyn System>>,
}

impl MoveEngine {
    /// 設定に従ってシャッフルして配ったところから始める。
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = TableBoard::deal_with_rng(&mut rng)?;
        info!("MoveEngine started (click delay: {} ticks, seed: {:?}).", config.click_delay_ticks, config.seed);
        Ok(Self::assemble(GameState::new(board), config, rng))
    }

    /// 既存の状態から始める。状態は不変条件のチェックを通ったものだけ。
    pub fn from_state(state: GameState, config: EngineConfig) -> Result<Self, EngineError> {
        integrity::check_game_state(&state)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::assemble(state, config, rng))
    }

    fn assemble(state: GameState, config: EngineConfig, rng: StdRng) -> Self {
        Self {
            state,
            config,
            rng,
            tick_count: 0,
            last_click_tick: None,
            systems: vec![Box::new(RevealSystem), Box::new(WinConditionSystem)],
        }
    }

    /// 1 tick 進める。
    pub fn tick(&mut self, input: PointerInput) -> Result<TickReport, EngineError> {
        self.tick_count += 1;
        let hit = input.hit.map(event_handler::validate_region).transpose()?;
        let mut events = Vec::new();

        if self.state.is_won() {
            return Ok(self.report(events));
        }

        if input.pointer_down {
            if self.click_accepted() {
                self.last_click_tick = Some(self.tick_count);
                if let Some(region) = hit {
                    event_handler::handle_pointer_down(&mut self.state, region, &mut events)?;
                }
            } else {
                debug!("Click at tick {} ignored (debounce).", self.tick_count);
            }
        } else if self.state.board.is_card_held() {
            drag_handler::handle_drag_end(&mut self.state, hit, &mut events)?;
        }

        for system in self.systems.iter_mut() {
            system.run(&mut self.state, &mut events)?;
        }
        Ok(self.report(events))
    }

    fn click_accepted(&self) -> bool {
        match self.last_click_tick {
            None => true,
            Some(last) => self.tick_count - last >= u64::from(self.config.click_delay_ticks),
        }
    }

    fn report(&self, events: Vec<GameEvent>) -> TickReport {
        TickReport {
            events,
            card_held: self.state.board.is_card_held(),
            victory: self.state.is_won(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &TableBoard {
        &self.state.board
    }

    pub fn is_card_held(&self) -> bool {
        self.state.board.is_card_held()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// 状態を差し替える。不変条件を満たさなければ今の状態はそのまま。
    pub fn restore(&mut self, state: GameState) -> Result<(), EngineError> {
        integrity::check_game_state(&state)?;
        self.state = state;
        self.last_click_tick = None;
        info!("Game state restored.");
        Ok(())
    }

    pub fn snapshot_json(&self) -> Result<String, EngineError> {
        state_getter::get_game_state_json(&self.state)
    }

    pub fn restore_json(&mut self, json: &str) -> Result<(), EngineError> {
        let state = state_getter::load_game_state_json(json)?;
        self.restore(state)
    }

    /// 配り直して最初から。
    pub fn new_game(&mut self) -> Result<(), EngineError> {
        let mut board = TableBoard::empty();
        DealInitialCardsSystem.deal(&mut board, &mut self.rng)?;
        self.state = GameState::new(board);
        self.last_click_tick = None;
        info!("New game dealt.");
        Ok(())
    }
}

/// 「拾う」だけを純粋な関数として行う (デバウンスもシステムも無し)。
pub fn apply_pickup(mut state: GameState, region: HitRegion) -> Result<(GameState, Vec<GameEvent>), EngineError> {
    let region = event_handler::validate_region(region)?;
    let mut events = Vec::new();
    event_handler::handle_pointer_down(&mut state, region, &mut events)?;
    Ok((state, events))
}

/// 「置く」だけを純粋な関数として行う。置けなければ元の場所に戻る。
pub fn apply_placement(
    mut state: GameState,
    hit: Option<HitRegion>,
) -> Result<(GameState, Vec<GameEvent>), EngineError> {
    let hit = hit.map(event_handler::validate_region).transpose()?;
    let mut events = Vec::new();
    drag_handler::handle_drag_end(&mut state, hit, &mut events)?;
    Ok((state, events))
}
