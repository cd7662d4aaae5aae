//! Main render/view function (View in TEA pattern)

use ratatui::Frame;
use tracer_app::AppState;

use crate::layout;
use crate::theme::Theme;
use crate::widgets;

/// Render the complete UI. Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    frame.buffer_mut().set_style(area, theme.normal);
    let areas = layout::create(area, state.is_detail_open());

    frame.render_widget(widgets::TitleBar::new(state.list.len(), theme), areas.title);
    frame.render_widget(widgets::Rule::new(theme.normal), areas.top_rule);
    frame.render_widget(widgets::BlockList::new(&state.list, theme), areas.list);

    if let (Some((rule, pane)), Some(detail)) = (areas.detail, state.detail.as_ref()) {
        frame.render_widget(widgets::Rule::new(theme.normal), rule);
        frame.render_widget(widgets::DetailPane::new(detail, theme), pane);
    }

    frame.render_widget(widgets::Rule::new(theme.normal), areas.bottom_rule);
    let footer = widgets::Footer::new(state.ui_mode, theme)
        .with_status(state.status_message.as_deref());
    frame.render_widget(footer, areas.footer);
}
