use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    domain::movie::MovieDetail,
    presentation::config::{keybindings::Mode, Styles},
};

/// Details of the movie on top of the stack. Shows `Loading...` until the
/// fetch for that movie has resolved.
#[derive(Debug, Clone, Default)]
pub struct DetailsComponent;

impl DetailsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn lines(
        detail: &MovieDetail,
        is_favorite: bool,
        image_base_url: &str,
        styles: &Styles,
    ) -> Vec<Line<'static>> {
        let heading = styles.get_style(Mode::MovieDetails, "heading");
        let link = styles.get_style(Mode::MovieDetails, "link");
        let hint = styles.get_style(Mode::MovieDetails, "hint");

        let mut title = vec![Span::styled(
            detail.title.clone(),
            styles.get_style(Mode::MovieDetails, "title"),
        )];
        if let Some(year) = detail.release_year() {
            title.push(Span::raw(format!(" ({year})")));
        }
        if is_favorite {
            title.push(Span::styled(
                " ♥",
                styles.get_style(Mode::MovieDetails, "favorite"),
            ));
        }

        let mut lines = vec![Line::from(title)];

        let facts: Vec<String> = [detail.genre_line(), detail.runtime_line()]
            .into_iter()
            .flatten()
            .collect();
        if !facts.is_empty() {
            lines.push(Line::styled(facts.join(" · "), hint));
        }

        lines.push(Line::default());
        if !detail.overview.is_empty() {
            lines.extend(detail.overview.lines().map(|l| Line::raw(l.to_string())));
            lines.push(Line::default());
        }

        if !detail.cast.is_empty() {
            lines.push(Line::styled("Cast:", heading));
            for member in &detail.cast {
                let mut spans = vec![Span::raw(format!("  {}", member.name))];
                if !member.character.is_empty() {
                    spans.push(Span::styled(format!(" as {}", member.character), hint));
                }
                lines.push(Line::from(spans));
                if let Some(url) = member.photo_url(image_base_url) {
                    lines.push(Line::styled(format!("    {url}"), link));
                }
            }
            lines.push(Line::default());
        }

        if let Some(url) = detail.trailer_url() {
            lines.push(Line::styled("Videos:", heading));
            lines.push(Line::styled(format!("  {url}"), link));
            lines.push(Line::default());
        }

        if let Some(url) = detail.poster_url(image_base_url) {
            lines.push(Line::styled("Poster:", heading));
            lines.push(Line::styled(format!("  {url}"), link));
        }

        lines
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;

        let Some(detail) = state.details.detail.as_ref() else {
            frame.render_widget(
                Paragraph::new("Loading...").style(styles.get_style(Mode::MovieDetails, "hint")),
                area,
            );
            return;
        };

        let lines = Self::lines(
            detail,
            state.is_favorite(detail.id),
            state.image_base_url(),
            styles,
        );
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::TOP))
            .wrap(Wrap { trim: false })
            .scroll((state.details.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::msg::details::DetailsMsg,
        domain::movie::{CastMember, Genre, Video},
        presentation::components::test_support::*,
    };

    fn detail() -> MovieDetail {
        MovieDetail {
            id: 438631,
            title: "Dune".to_string(),
            poster_path: Some("/d5NXSklXo0qyIYkgV94XAgMIckC.jpg".to_string()),
            overview: "Paul Atreides travels to Arrakis.".to_string(),
            release_date: Some("2021-09-15".to_string()),
            genres: vec![
                Genre {
                    id: 878,
                    name: "Science Fiction".to_string(),
                },
                Genre {
                    id: 12,
                    name: "Adventure".to_string(),
                },
            ],
            runtime: Some(155),
            cast: vec![CastMember {
                id: 1190668,
                name: "Timothée Chalamet".to_string(),
                character: "Paul Atreides".to_string(),
                profile_path: Some("/BE2sdjpgsa2rNTFa66f7upkaOP.jpg".to_string()),
            }],
            videos: vec![Video {
                key: "n9xhJrPXop4".to_string(),
                name: "Official Trailer".to_string(),
                site: "YouTube".to_string(),
                video_type: "Trailer".to_string(),
            }],
        }
    }

    #[test]
    fn test_loading_until_detail_resolves() {
        let mut state = state_with_defaults();
        state.details.begin_fetch(438631);

        let lines = render_lines(60, 12, |f| DetailsComponent::new().view(&state, f, f.area()));
        assert!(contains(&lines, "Loading..."));
        assert!(!contains(&lines, "Dune"));

        state.details.update(DetailsMsg::Loaded(Box::new(detail())));
        let lines = render_lines(80, 20, |f| DetailsComponent::new().view(&state, f, f.area()));
        assert!(!contains(&lines, "Loading..."));
        assert!(contains(&lines, "Dune (2021)"));
        assert!(contains(&lines, "Science Fiction, Adventure · 155 mins"));
        assert!(contains(&lines, "Cast:"));
        assert!(contains(&lines, "Timothée Chalamet as Paul Atreides"));
        assert!(contains(
            &lines,
            "https://image.tmdb.org/t/p/w200/BE2sdjpgsa2rNTFa66f7upkaOP.jpg"
        ));
        assert!(contains(&lines, "https://www.youtube.com/watch?v=n9xhJrPXop4"));
        assert!(contains(
            &lines,
            "https://image.tmdb.org/t/p/w500/d5NXSklXo0qyIYkgV94XAgMIckC.jpg"
        ));
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let bare = MovieDetail {
            id: 1,
            title: "Untitled".to_string(),
            ..Default::default()
        };
        let state = state_with_defaults();
        let lines = DetailsComponent::lines(
            &bare,
            false,
            state.image_base_url(),
            &state.config.config.styles,
        );
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        assert_eq!(text[0], "Untitled");
        assert!(!text.iter().any(|l| l.contains("Cast:")));
        assert!(!text.iter().any(|l| l.contains("Videos:")));
        assert!(!text.iter().any(|l| l.contains("mins")));
    }

    #[test]
    fn test_scroll_moves_body() {
        let mut state = state_with_defaults();
        state.details.begin_fetch(438631);
        state.details.update(DetailsMsg::Loaded(Box::new(detail())));
        state.details.update(DetailsMsg::ScrollDown);
        state.details.update(DetailsMsg::ScrollDown);

        let lines = render_lines(80, 20, |f| DetailsComponent::new().view(&state, f, f.area()));
        assert!(!contains(&lines, "Dune (2021)"));
        assert!(contains(&lines, "Paul Atreides travels to Arrakis."));
    }
}
