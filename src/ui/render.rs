use crate::menu::Screen;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screens::{draw_add_item, draw_filter, draw_home};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();
    let screen = state.screen();

    let header_widget = Header::new(&app.ui_config().title);
    frame.render_widget(header_widget.widget(screen, state.machine.len()), header);

    frame.render_widget(Clear, body);
    match screen {
        Screen::Home => draw_home(frame, body, state, app.ui_config()),
        Screen::AddItem => draw_add_item(frame, body, state, app.ui_config()),
        Screen::Filter => draw_filter(frame, body, state, app.ui_config()),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(screen, footer), footer);
}
