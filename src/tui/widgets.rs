//! Custom widgets for the game UI

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Progress bar for clues collected out of clues in the mansion
pub struct ClueMeter {
    found: usize,
    total: usize,
    color: Color,
}

impl ClueMeter {
    pub fn new(found: usize, total: usize) -> Self {
        Self {
            found,
            total,
            color: Color::Green,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Widget for ClueMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let label = format!("Clues: {}/{}", self.found, self.total);
        buf.set_string(area.x, area.y, &label, Style::default().fg(self.color));

        if area.height > 1 && self.total > 0 {
            let inner = area.width - 2;
            let filled = (self.found.min(self.total) as u16 * inner) / self.total as u16;
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(self.color));
            }
            for x in filled..inner {
                buf.set_string(area.x + 1 + x, bar_y, "░", Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// Current room and the doors out of it
pub struct RoomCard<'a> {
    room: &'a str,
    left: Option<&'a str>,
    right: Option<&'a str>,
}

impl<'a> RoomCard<'a> {
    pub fn new(room: &'a str, left: Option<&'a str>, right: Option<&'a str>) -> Self {
        Self { room, left, right }
    }
}

impl Widget for RoomCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let bold = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        buf.set_stringn(area.x, area.y, format!("📍 {}", self.room), area.width as usize, bold);

        let exits = [("[e] ←", self.left), ("[d] →", self.right), ("[s] ⏏", Some("Leave"))];
        let mut y = area.y + 1;
        for (key, name) in exits {
            if y >= area.y + area.height {
                break;
            }
            if let Some(name) = name {
                buf.set_stringn(area.x, y, format!("{} {}", key, name), area.width as usize, Style::default());
                y += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn meter_fills_proportionally() {
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);
        ClueMeter::new(1, 2).render(area, &mut buf);
        assert!(row(&buf, 0).starts_with("Clues: 1/2"));
        assert_eq!(row(&buf, 1), "[█████░░░░░]");
    }

    #[test]
    fn room_card_lists_exits() {
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        RoomCard::new("Cozinha", Some("Porao Escuro"), None).render(area, &mut buf);
        assert!(row(&buf, 1).contains("Porao Escuro"));
        assert!(row(&buf, 2).contains("Leave"));
        assert!(row(&buf, 3).trim().is_empty());
    }
}
