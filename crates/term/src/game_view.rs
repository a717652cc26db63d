//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each tile covers `cell_w x cell_h` terminal cells. The player sprite is
//! drawn in half-block pixels, so a tile is `cell_w` pixels wide and
//! `2 * cell_h` pixels tall.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::engine::{GameSnapshot, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::sprite::{SpriteFrame, SpriteSheet};
use crate::types::{Tile, GRID_HEIGHT, GRID_WIDTH, PLACEABLE, SKY_ROWS};

const SKY: Rgb = Rgb::new(135, 206, 235);
const TILE_BORDER: Rgb = Rgb::new(40, 40, 40);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const VICTORY_TEXT: Rgb = Rgb::new(0, 255, 0);
const GAME_OVER_TEXT: Rgb = Rgb::new(255, 0, 0);

/// Columns reserved for the side panel, gap included
const PANEL_WIDTH: u16 = 26;
const PANEL_GAP: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board and HUD land for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left terminal cell of tile (0, 0)
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    /// Top-left of the side panel, when it fits
    pub panel: Option<(u16, u16)>,
    /// Row of the compact status line, used instead of the panel
    pub status_y: Option<u16>,
}

impl BoardLayout {
    pub fn board_width(&self) -> u16 {
        GRID_WIDTH as u16 * self.cell_w
    }

    pub fn board_height(&self) -> u16 {
        GRID_HEIGHT as u16 * self.cell_h
    }

    /// Terminal cell to grid units, measured at the cell centre. Positions
    /// outside the board map outside `0..16`.
    pub fn cell_to_grid(&self, column: u16, row: u16) -> (f32, f32) {
        let x = (column as f32 - self.origin_x as f32 + 0.5) / self.cell_w as f32;
        let y = (row as f32 - self.origin_y as f32 + 0.5) / self.cell_h as f32;
        (x, y)
    }
}

/// A lightweight terminal renderer for the mining game.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    sprites: Option<SpriteSheet>,
    placeholder: SpriteFrame,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps tiles roughly square in typical terminal fonts.
        Self::new(4, 2)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        let cell_w = cell_w.max(1);
        let cell_h = cell_h.max(1);
        Self {
            cell_w,
            cell_h,
            sprites: None,
            placeholder: SpriteFrame::placeholder(cell_w as u32, cell_h as u32 * 2),
        }
    }

    pub fn with_sprites(mut self, sprites: SpriteSheet) -> Self {
        self.sprites = Some(sprites);
        self
    }

    pub fn has_sprites(&self) -> bool {
        self.sprites.is_some()
    }

    /// Size of one tile in half-block pixels, for scaling sprite sheets
    pub fn tile_pixel_size(&self) -> (u32, u32) {
        (self.cell_w as u32, self.cell_h as u32 * 2)
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        let board_w = GRID_WIDTH as u16 * self.cell_w;
        let board_h = GRID_HEIGHT as u16 * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let with_panel = frame_w + PANEL_GAP + PANEL_WIDTH;
        if viewport.width >= with_panel {
            let start_x = (viewport.width - with_panel) / 2;
            let start_y = viewport.height.saturating_sub(frame_h) / 2;
            BoardLayout {
                origin_x: start_x + 1,
                origin_y: start_y + 1,
                cell_w: self.cell_w,
                cell_h: self.cell_h,
                panel: Some((start_x + frame_w + PANEL_GAP, start_y)),
                status_y: None,
            }
        } else {
            let start_x = viewport.width.saturating_sub(frame_w) / 2;
            let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;
            BoardLayout {
                origin_x: start_x + 1,
                origin_y: start_y + 1,
                cell_w: self.cell_w,
                cell_h: self.cell_h,
                panel: None,
                status_y: Some(start_y + frame_h),
            }
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
        draw_border(
            fb,
            layout.origin_x - 1,
            layout.origin_y - 1,
            layout.board_width() + 2,
            layout.board_height() + 2,
            border,
        );

        // Sky behind everything; air tiles in the sky rows are not drawn.
        fb.fill_rect(
            layout.origin_x,
            layout.origin_y,
            layout.board_width(),
            layout.board_height(),
            ' ',
            CellStyle::new(SKY, SKY),
        );
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                if tile == Tile::Air && y < SKY_ROWS {
                    continue;
                }
                self.draw_tile(fb, &layout, x as u16, y as u16, tile);
            }
        }

        self.draw_player(fb, &layout, snap);

        match layout.panel {
            Some((x, y)) => draw_side_panel(fb, snap, x, y),
            None => {
                if let Some(y) = layout.status_y {
                    draw_status_line(fb, snap, layout.origin_x - 1, y);
                }
            }
        }

        match snap.phase {
            Phase::Playing => {}
            Phase::Victory { .. } => {
                let mut title = TextLine::new();
                let _ = write!(title, "LEVEL {} COMPLETE!", snap.level);
                let mut score = TextLine::new();
                let _ = write!(score, "Score: {}", snap.score);
                let mut inv = TextLine::new();
                for (i, tile) in PLACEABLE.iter().enumerate() {
                    let sep = if i == 0 { "" } else { "  " };
                    let _ = write!(inv, "{sep}{} {}", tile.label(), snap.inventory[i]);
                }
                draw_overlay(
                    fb,
                    &layout,
                    &[
                        (title.as_str(), CellStyle::new(VICTORY_TEXT, BLACK).bold()),
                        (score.as_str(), CellStyle::new(TEXT, BLACK)),
                        (inv.as_str(), CellStyle::new(TEXT, BLACK)),
                    ],
                );
            }
            Phase::GameOver { score, .. } => {
                let mut line = TextLine::new();
                let _ = write!(line, "Score: {score}");
                draw_overlay(
                    fb,
                    &layout,
                    &[
                        ("GAME OVER!", CellStyle::new(GAME_OVER_TEXT, BLACK).bold()),
                        (line.as_str(), CellStyle::new(TEXT, BLACK)),
                    ],
                );
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Flat colour with a thin dark line along the bottom and right edges.
    fn draw_tile(&self, fb: &mut FrameBuffer, layout: &BoardLayout, x: u16, y: u16, tile: Tile) {
        let fill = Rgb::from(tile.rgb());
        let style = CellStyle::new(TILE_BORDER, fill);
        let px = layout.origin_x + x * self.cell_w;
        let py = layout.origin_y + y * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = if self.cell_w > 1 && dx == self.cell_w - 1 {
                    '▕'
                } else if self.cell_h > 1 && dy == self.cell_h - 1 {
                    '▁'
                } else {
                    ' '
                };
                fb.put_char(px + dx, py + dy, ch, style);
            }
        }
    }

    fn draw_player(&self, fb: &mut FrameBuffer, layout: &BoardLayout, snap: &GameSnapshot) {
        let frame = match &self.sprites {
            Some(sheet) => sheet.frame(snap.player.pose),
            None => &self.placeholder,
        };

        let (tile_w, tile_h) = self.tile_pixel_size();
        let left = layout.origin_x as i32;
        let top = layout.origin_y as i32 * 2;
        let right = left + layout.board_width() as i32;
        let bottom = top + layout.board_height() as i32 * 2;

        let x0 = left + (snap.player.x * tile_w as f32).floor() as i32;
        let y0 = top + (snap.player.y * tile_h as f32).floor() as i32;

        for fy in 0..frame.height() {
            let py = y0 + fy as i32;
            if py < top || py >= bottom {
                continue;
            }
            for fx in 0..frame.width() {
                let px = x0 + fx as i32;
                if px < left || px >= right {
                    continue;
                }
                let [r, g, b, a] = frame.pixel(fx, fy);
                fb.blend_pixel(px as u16, py as u32, Rgb::new(r, g, b), a);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, panel_x: u16, start_y: u16) {
    let label = CellStyle::new(TEXT, BLACK).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), BLACK);
    let dim = CellStyle { dim: true, ..value };

    let mut y = start_y;
    fb.put_str(panel_x, y, "LEVEL", label);
    y = y.saturating_add(1);
    fb.put_u32(panel_x, y, snap.level, value);
    y = y.saturating_add(2);

    fb.put_str(panel_x, y, "SCORE", label);
    y = y.saturating_add(1);
    fb.put_u32(panel_x, y, snap.score, value);
    y = y.saturating_add(2);

    fb.put_str(panel_x, y, "SELECTED", label);
    y = y.saturating_add(1);
    fb.put_str(panel_x, y, snap.selected_tile().label(), value);
    y = y.saturating_add(2);

    fb.put_str(panel_x, y, "INVENTORY", label);
    y = y.saturating_add(1);
    for (slot, tile) in PLACEABLE.iter().enumerate() {
        let selected = slot == snap.selected;
        let row = if selected { CellStyle { bold: true, ..value } } else { value };
        fb.put_char(panel_x, y, if selected { '>' } else { ' ' }, row);
        fb.put_u32(panel_x + 1, y, slot as u32 + 1, dim);
        fb.put_char(panel_x + 3, y, '█', CellStyle::new(Rgb::from(tile.rgb()), BLACK));
        fb.put_str(panel_x + 5, y, tile.label(), row);
        fb.put_u32(panel_x + 14, y, snap.inventory[slot], row);
        y = y.saturating_add(1);
    }
    y = y.saturating_add(1);

    fb.put_str(panel_x, y, "ORE", label);
    y = y.saturating_add(1);
    for (tile, total) in [
        (Tile::Diamond, snap.ore_totals.diamond),
        (Tile::Emerald, snap.ore_totals.emerald),
    ] {
        fb.put_str(panel_x + 1, y, tile.label(), value);
        let mut progress = TextLine::new();
        let _ = write!(progress, "{}/{}", snap.count(tile).min(total), total);
        let done = total > 0 && snap.count(tile) >= total;
        let style = if done { CellStyle::new(VICTORY_TEXT, BLACK) } else { value };
        fb.put_str(panel_x + 10, y, progress.as_str(), style);
        y = y.saturating_add(1);
    }
    y = y.saturating_add(1);

    fb.put_str(panel_x, y, "CONTROLS", label);
    y = y.saturating_add(1);
    for help in [
        "A/D move  W/Space jump",
        "1-5 select block",
        "LMB mine  RMB place",
        "Q/Esc quit",
    ] {
        fb.put_str(panel_x + 1, y, help, dim);
        y = y.saturating_add(1);
    }
}

fn draw_status_line(fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
    let selected = snap.selected_tile();
    let mut line = TextLine::new();
    let _ = write!(
        line,
        "Lv {}  Score {}  [{}] {} x{}  Ore {}/{} {}/{}  Q quit",
        snap.level,
        snap.score,
        snap.selected + 1,
        selected.label(),
        snap.count(selected),
        snap.count(Tile::Diamond),
        snap.ore_totals.diamond,
        snap.count(Tile::Emerald),
        snap.ore_totals.emerald,
    );
    fb.put_str(x, y, line.as_str(), CellStyle::new(TEXT, BLACK));
}

/// Centred block of text lines over the middle of the board.
fn draw_overlay(fb: &mut FrameBuffer, layout: &BoardLayout, lines: &[(&str, CellStyle)]) {
    let widest = lines
        .iter()
        .map(|(text, _)| text.chars().count() as u16)
        .max()
        .unwrap_or(0);
    let box_w = (widest + 4).min(layout.board_width());
    let box_h = lines.len() as u16 * 2 + 1;
    let box_x = layout.origin_x + layout.board_width().saturating_sub(box_w) / 2;
    let box_y = layout.origin_y + layout.board_height().saturating_sub(box_h) / 2;

    fb.fill_rect(box_x, box_y, box_w, box_h, ' ', CellStyle::new(TEXT, BLACK));
    for (i, (text, style)) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = box_x + box_w.saturating_sub(text_w) / 2;
        fb.put_str(x, box_y + 1 + i as u16 * 2, text, *style);
    }
}

/// Fixed-capacity text for HUD lines; formatting never allocates. A write
/// that would overflow is dropped whole.
type TextLine = ArrayString<96>;
