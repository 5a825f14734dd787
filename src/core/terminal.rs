use crate::constants::RESUME_OPEN_DELAY_MS;
use crate::core::profile::Profile;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    About,
    Skills,
    Experience,
    Contact,
    Resume,
    Clear,
    Help,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::About,
        Command::Skills,
        Command::Experience,
        Command::Contact,
        Command::Resume,
        Command::Clear,
        Command::Help,
    ];

    /// Case-insensitive match after trimming surrounding whitespace.
    pub fn parse(input: &str) -> Option<Command> {
        let wanted = input.trim().to_lowercase();
        Command::ALL.into_iter().find(|c| c.name() == wanted)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::About => "about",
            Command::Skills => "skills",
            Command::Experience => "experience",
            Command::Contact => "contact",
            Command::Resume => "resume",
            Command::Clear => "clear",
            Command::Help => "help",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::About => "View detailed information about me",
            Command::Skills => "Display technical skills and expertise",
            Command::Experience => "Show work experience and projects",
            Command::Contact => "Get contact information",
            Command::Resume => "Download my resume",
            Command::Clear => "Clear terminal output",
            Command::Help => "List available commands",
        }
    }
}

/// One prompt line plus its rendered output block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Plain text shown after the prompt.
    pub command: String,
    /// Trusted HTML; any user text inside is already escaped.
    pub body: Option<String>,
}

/// Side effect the host should perform after rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    OpenUrl { url: &'static str, delay_ms: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Appended(Option<Effect>),
    Cleared,
    Ignored,
}

/// Scripted terminal: canned output for a fixed vocabulary, appended to a log.
pub struct Terminal {
    profile: &'static Profile,
    entries: Vec<Entry>,
}

impl Terminal {
    pub fn new(profile: &'static Profile) -> Self {
        Self {
            profile,
            entries: Vec::new(),
        }
    }

    #[allow(dead_code)] // host tests
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn execute(&mut self, input: &str) -> Response {
        let Some(cmd) = Command::parse(input) else {
            let typed = input.trim();
            if typed.is_empty() {
                return Response::Ignored;
            }
            self.entries.push(Entry {
                command: typed.to_string(),
                body: Some(unknown_command_html(typed)),
            });
            return Response::Appended(None);
        };
        if cmd == Command::Clear {
            self.entries.clear();
            return Response::Cleared;
        }
        let body = self.render(cmd);
        self.entries.push(Entry {
            command: cmd.name().to_string(),
            body: Some(body),
        });
        match cmd {
            Command::Resume => Response::Appended(Some(Effect::OpenUrl {
                url: self.profile.resume_path,
                delay_ms: RESUME_OPEN_DELAY_MS,
            })),
            _ => Response::Appended(None),
        }
    }

    fn render(&self, cmd: Command) -> String {
        let p = self.profile;
        let mut out = String::new();
        match cmd {
            Command::About => {
                _ = write!(
                    out,
                    "<div class=\"profile-info\"><h3>{}</h3><p class=\"title\">{}</p><p class=\"description\">{}</p></div>",
                    escape_html(p.name),
                    escape_html(p.title),
                    escape_html(p.description)
                );
            }
            Command::Skills => {
                out.push_str("<div class=\"skills-grid\">");
                for group in p.skills {
                    _ = write!(
                        out,
                        "<div class=\"skill-category\"><h4>{}</h4><div class=\"skill-tags\">",
                        escape_html(group.title)
                    );
                    for tag in group.tags {
                        _ = write!(out, "<span class=\"skill-tag\">{}</span>", escape_html(tag));
                    }
                    out.push_str("</div></div>");
                }
                out.push_str("</div>");
            }
            Command::Experience => {
                out.push_str("<div class=\"experience-list\">");
                for role in p.experience {
                    _ = write!(
                        out,
                        "<div class=\"experience-item\"><div class=\"exp-header\"><span class=\"exp-title\">{}</span><span class=\"exp-period\">{}</span></div><p class=\"exp-company\">{}</p><p class=\"exp-description\">{}</p></div>",
                        escape_html(role.title),
                        escape_html(role.period),
                        escape_html(role.company),
                        escape_html(role.summary)
                    );
                }
                out.push_str("</div>");
            }
            Command::Contact => {
                out.push_str("<div class=\"contact-info\">");
                for link in p.contact {
                    let text = match link.href {
                        Some(href) => format!(
                            "<a href=\"{}\" target=\"_blank\">{}</a>",
                            escape_html(href),
                            escape_html(link.text)
                        ),
                        None => escape_html(link.text),
                    };
                    _ = write!(out, "<p><strong>{}:</strong> {}</p>", escape_html(link.label), text);
                }
                out.push_str("</div>");
            }
            Command::Resume => {
                _ = write!(
                    out,
                    "<div class=\"resume-info\"><p>Opening resume in new tab...</p><p><a href=\"{}\" target=\"_blank\" class=\"resume-link\">Download Resume</a></p></div>",
                    escape_html(p.resume_path)
                );
            }
            Command::Help => {
                out.push_str("<div class=\"help-menu\"><h4>Available Commands:</h4><div class=\"command-list\">");
                for c in Command::ALL.into_iter().filter(|c| *c != Command::Help) {
                    _ = write!(
                        out,
                        "<div class=\"command-item\"><span class=\"cmd-name\">{}</span><span class=\"cmd-desc\">- {}</span></div>",
                        c.name(),
                        c.description()
                    );
                }
                out.push_str("</div></div>");
            }
            Command::Clear => {}
        }
        out
    }
}

fn unknown_command_html(typed: &str) -> String {
    format!(
        "<div class=\"error-message\">Command not found: {}<br>Type 'help' for available commands.</div>",
        escape_html(typed)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
