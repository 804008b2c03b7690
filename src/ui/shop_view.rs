// ui/shop_view.rs

use crate::{
    app::{Action, InputMode},
    context::Context,
    message::Message,
    shop::{Shop, StoreItem, load_shop},
    ui::constants::{DBD_BLACK, DBD_RED, SHOP_HINTS},
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};

use super::Component;

#[derive(Debug)]
pub struct ShopView {
    shop: Shop,
    selected_category: usize,
}

impl Component for ShopView {
    fn on_key(&mut self, key: KeyEvent, _context: &mut Context) -> Option<Action> {
        let categories = self.shop.categories.len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') if categories > 0 => {
                self.selected_category = (self.selected_category + categories - 1) % categories;
                None
            }
            KeyCode::Right | KeyCode::Char('l') if categories > 0 => {
                self.selected_category = (self.selected_category + 1) % categories;
                None
            }
            KeyCode::Char('g') => {
                log::info!("Auric cell purchase requested");
                Some(Action::Notify(Message::info(
                    "Auric cells cannot be purchased here.",
                )))
            }
            _ => None,
        }
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, _context: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(6),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new(self.shop.title.to_uppercase())
            .style(Style::default().fg(DBD_RED).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .render(chunks[0], buffer);
        self.render_categories(buffer, chunks[1]);
        self.render_balances(buffer, chunks[2]);

        if self.shop.is_empty() {
            Paragraph::new("The shop is closed. Check back later.")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
                .render(chunks[3].union(chunks[4]), buffer);
        } else {
            self.render_featured(buffer, chunks[3]);
            self.render_special(buffer, chunks[4]);
        }

        Paragraph::new(" GET AURIC CELLS ")
            .style(Style::default().fg(Color::White).bg(DBD_RED))
            .alignment(Alignment::Center)
            .render(chunks[5], buffer);
    }

    fn key_hints(&self, _input_mode: InputMode) -> &'static str {
        SHOP_HINTS
    }
}

impl ShopView {
    pub fn new(context: &mut Context) -> Self {
        Self::from_shop(load_shop(context.resources.as_ref()))
    }

    pub fn from_shop(shop: Shop) -> Self {
        Self {
            shop,
            selected_category: 0,
        }
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.shop
            .categories
            .get(self.selected_category)
            .map(String::as_str)
    }

    fn render_categories(&self, buffer: &mut Buffer, area: Rect) {
        let spans: Vec<Span> = self
            .shop
            .categories
            .iter()
            .enumerate()
            .flat_map(|(index, category)| {
                let style = if index == self.selected_category {
                    Style::default()
                        .fg(Color::White)
                        .bg(DBD_RED)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                [Span::styled(format!(" {category} "), style), Span::raw(" ")]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buffer);
    }

    fn render_balances(&self, buffer: &mut Buffer, area: Rect) {
        let spans: Vec<Span> = self
            .shop
            .balances
            .iter()
            .flat_map(|balance| {
                [
                    Span::styled(
                        format!("{} ", balance.amount),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{}   ", balance.currency),
                        Style::default().fg(Color::Gray),
                    ),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(area, buffer);
    }

    fn render_featured(&self, buffer: &mut Buffer, area: Rect) {
        if self.shop.featured.is_empty() {
            return;
        }
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                self.shop
                    .featured
                    .iter()
                    .map(|_| Constraint::Ratio(1, self.shop.featured.len() as u32)),
            )
            .split(area);

        for (item, column) in self.shop.featured.iter().zip(columns.iter()) {
            item_card(item).render(*column, buffer);
        }
    }

    fn render_special(&self, buffer: &mut Buffer, area: Rect) {
        let items: Vec<ListItem> = self
            .shop
            .special
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<24}", item.name),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<24}", item.description),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(item.price.clone(), Style::default().fg(Color::Yellow)),
                ]))
            })
            .collect();

        Widget::render(
            List::new(items).block(
                Block::default()
                    .border_type(BorderType::Rounded)
                    .borders(Borders::ALL)
                    .title(" SPECIAL OFFERS ")
                    .border_style(Style::default().fg(DBD_RED)),
            ),
            area,
            buffer,
        );
    }
}

fn item_card(item: &StoreItem) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            item.name.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            item.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("[{}]", item.asset_key()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            item.price.as_str(),
            Style::default().fg(Color::Yellow),
        )),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().bg(DBD_BLACK))
    .block(
        Block::default()
            .border_type(BorderType::Rounded)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DBD_RED)),
    )
}
