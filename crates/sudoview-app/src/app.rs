//! Sudoview application UI.
//!
//! # Design Notes
//! - Fixed-size 9×9 grid with clear 3×3 boundaries, redrawn every frame.
//! - Mouse selects a cell; digits fill it, `0`/Delete/Backspace clear it.
//! - Selection is an explicit `Option<Position>` evaluated once per frame —
//!   no nested event loop while a cell is focused.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, InputState, Key, TopBottomPanel},
};
use log::debug;
use sudoview_core::{Digit, DigitGrid, Position};
use sudoview_game::Board;

use crate::ui;

// 60 Hz repaint cadence.
const TICK: Duration = Duration::from_micros(16_667);

#[derive(Debug)]
pub struct SudoviewApp {
    board: Board,
    selected: Option<Position>,
}

impl SudoviewApp {
    pub fn new(_cc: &CreationContext<'_>, givens: &DigitGrid) -> Self {
        Self {
            board: Board::new(givens),
            selected: None,
        }
    }

    fn set_digit(&mut self, digit: Digit) {
        if let Some(pos) = self.selected
            && let Err(err) = self.board.set_digit(pos, digit)
        {
            debug!("rejected digit {digit} at ({}, {}): {err}", pos.x(), pos.y());
        }
    }

    fn clear_cell(&mut self) {
        if let Some(pos) = self.selected
            && let Err(err) = self.board.clear_cell(pos)
        {
            debug!("rejected clear at ({}, {}): {err}", pos.x(), pos.y());
        }
    }

    fn handle_input(&mut self, i: &InputState) {
        const DEFAULT_POSITION: Position = Position::new(0, 0);
        if i.key_pressed(Key::ArrowUp) {
            let pos = self.selected.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.up() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowDown) {
            let pos = self.selected.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.down() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowLeft) {
            let pos = self.selected.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.left() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::ArrowRight) {
            let pos = self.selected.get_or_insert(DEFAULT_POSITION);
            if let Some(p) = pos.right() {
                *pos = p;
            }
        }
        if i.key_pressed(Key::Escape) {
            self.selected = None;
        }

        let pairs = [
            (Key::Num0, None),
            (Key::Delete, None),
            (Key::Backspace, None),
            (Key::Num1, Some(Digit::D1)),
            (Key::Num2, Some(Digit::D2)),
            (Key::Num3, Some(Digit::D3)),
            (Key::Num4, Some(Digit::D4)),
            (Key::Num5, Some(Digit::D5)),
            (Key::Num6, Some(Digit::D6)),
            (Key::Num7, Some(Digit::D7)),
            (Key::Num8, Some(Digit::D8)),
            (Key::Num9, Some(Digit::D9)),
        ];
        for (key, digit) in pairs {
            if i.key_pressed(key) {
                if let Some(digit) = digit {
                    self.set_digit(digit);
                } else {
                    self.clear_cell();
                }
            }
        }
    }
}

impl App for SudoviewApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.input(|i| self.handle_input(i));

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("{} / 81 cells decided", self.board.decided_count()));
        });
        CentralPanel::default().show(ctx, |ui| {
            if let Some(pos) = ui::grid::show(ui, &self.board, self.selected) {
                self.selected = Some(pos);
            }
        });

        ctx.request_repaint_after(TICK);
    }
}
