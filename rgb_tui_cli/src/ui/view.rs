//! Layout of the picker and the reflection of laid-out regions back into
//! the controller.
//!
//! ```text
//! ┌──────────────[ rgb-tui ]──────────────┐
//! │ gradient plane (rows)                 │
//! │───────────────────────────────────────│
//! │ tile 20x7 │ Hue / Saturation / Value  │
//! │           │ ──────────────────────────│
//! │           │ Red / Green / Blue        │
//! └───────────────────────────────────────┘
//! ┌ Hexa ┐┌ RGB ┐┌ HSV ┐
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
    Frame,
};
use rgb_tui_core::color::{format_hex, hsv_text, rgb_text};
use rgb_tui_core::gradient::MIN_COLUMNS;
use rgb_tui_core::input::Focus;
use rgb_tui_core::{Channel, InputController, Region};

use crate::ui::colors::{channel_color, rgb_color};
use crate::ui::widgets::{GradientWidget, ReadoutWidget, SliderWidget};

pub const TITLE: &str = "[ rgb-tui ]";
const HINT: &str = " q quit · tab focus · arrows adjust ";
pub const TILE_WIDTH: u16 = 20;
pub const TILE_HEIGHT: u16 = 7;
const READOUT_HEIGHT: u16 = 3;
/// Window borders plus the separator under the plane
const CHROME_HEIGHT: u16 = 3;

/// Inline viewport height needed for a plane of `rows` rows
pub fn viewport_height(rows: u16) -> u16 {
    rows + CHROME_HEIGHT + TILE_HEIGHT + READOUT_HEIGHT
}

fn region_of(area: Rect) -> Region {
    Region::from_origin_size(area.x, area.y, area.width, area.height)
}

/// Draw one frame and reflect the gradient and slider regions.
pub fn draw(frame: &mut Frame, controller: &mut InputController, max_width: u16) {
    let full = frame.area();
    let area = Rect {
        width: full.width.min(max_width),
        ..full
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(READOUT_HEIGHT)])
        .split(area);

    draw_window(frame, chunks[0], controller);
    draw_readouts(frame, chunks[1], controller);
}

fn draw_window(frame: &mut Frame, area: Rect, controller: &mut InputController) {
    let border_style = match controller.focus() {
        Focus::Picker => Style::default().fg(Color::Cyan),
        Focus::Sliders => Style::default(),
    };
    let window = Block::bordered()
        .border_style(border_style)
        .title(Line::from(TITLE).centered())
        .title_bottom(Line::from(HINT).centered());
    let inner = window.inner(area);
    frame.render_widget(window, area);

    let rows = controller.picker().rows();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(rows),
            Constraint::Length(1),
            Constraint::Length(TILE_HEIGHT),
        ])
        .split(inner);

    // Too narrow for the plane: draw nothing and leave no pickable region.
    let plane_area = chunks[0];
    if plane_area.width >= MIN_COLUMNS {
        let hsv = controller.hsv();
        let plane = controller.picker().plane(hsv.h, plane_area.width);
        frame.render_widget(GradientWidget::new(plane, hsv), plane_area);
        controller.reflect_gradient(region_of(plane_area));
    } else {
        controller.reflect_gradient(Region::from_origin_size(plane_area.x, plane_area.y, 0, 0));
    }

    frame.render_widget(Block::default().borders(Borders::TOP), chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(TILE_WIDTH),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(chunks[2]);

    let tile = Block::default().style(Style::default().bg(rgb_color(controller.rgb())));
    frame.render_widget(tile, bottom[0]);
    frame.render_widget(Block::default().borders(Borders::LEFT), bottom[1]);

    draw_sliders(frame, bottom[2], controller);
}

fn draw_sliders(frame: &mut Frame, area: Rect, controller: &mut InputController) {
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 7])
        .split(area);

    // H, S, V, separator, R, G, B
    let slots = [0, 1, 2, 4, 5, 6];
    frame.render_widget(Block::default().borders(Borders::TOP), lines[3]);

    let rgb = controller.rgb();
    let focused = match controller.focus() {
        Focus::Sliders => Some(controller.sliders().selected()),
        Focus::Picker => None,
    };

    for (channel, slot) in Channel::ALL.into_iter().zip(slots) {
        let line = lines[slot];
        let slider = SliderWidget::new(channel, controller.channels().get(channel))
            .focused(focused == Some(channel))
            .fill(channel_color(channel, rgb));
        frame.render_widget(slider, line);
        controller.reflect_slider(channel, region_of(SliderWidget::bar_area(line)));
    }
}

fn draw_readouts(frame: &mut Frame, area: Rect, controller: &InputController) {
    let readouts = [
        ReadoutWidget::new(" Hexa ", format_hex(controller.rgb())),
        ReadoutWidget::new(" RGB ", rgb_text(controller.rgb())),
        ReadoutWidget::new(" HSV ", hsv_text(controller.hsv())),
    ];

    let mut constraints: Vec<Constraint> = readouts
        .iter()
        .map(|readout| Constraint::Length(readout.width()))
        .collect();
    constraints.push(Constraint::Min(0));

    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (readout, area) in readouts.into_iter().zip(boxes.iter()) {
        frame.render_widget(readout, *area);
    }
}
