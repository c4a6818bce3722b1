use lazy_static::lazy_static;
use regex::{Captures, NoExpand, Regex};
use std::borrow::Cow;
use std::fmt;

lazy_static! {
    // Button anchor: opening tag, inner text, closing tag.
    static ref BUTTON_TEXT_REGEX: Regex =
        Regex::new(r"(<a class='link shake'[^<]+>)([^<]+)(</a>)").unwrap();
    static ref BODY_TEXT_REGEX: Regex =
        Regex::new(r"<p class='user-p'>[^<]+</p>").unwrap();
    static ref DESCRIPTION_TEXT_REGEX: Regex =
        Regex::new(r"<p class='center-p'>[^<]+</p>").unwrap();
    static ref LINK_HREF_REGEX: Regex =
        Regex::new(r"<a class='link shake' href='[^']+'").unwrap();
}

/// One of the independently mutable pieces of a page document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Inner text of the first `link shake` anchor
    ButtonText,
    /// Inner text of the `user-p` paragraph
    BodyText,
    /// Inner text of the `center-p` paragraph
    DescriptionText,
    /// `href` of every `link shake` anchor
    LinkHref,
}

impl FragmentKind {
    /// Human readable name, used in logs and confirmation messages
    pub fn label(&self) -> &'static str {
        match self {
            FragmentKind::ButtonText => "button text",
            FragmentKind::BodyText => "body text",
            FragmentKind::DescriptionText => "description",
            FragmentKind::LinkHref => "link",
        }
    }

    /// Whether the current document contains this fragment in matchable form
    pub fn is_present(&self, document: &str) -> bool {
        self.regex().is_match(document)
    }

    /// Substitute `value` into the fragment.
    ///
    /// Text fragments replace the first match only, `LinkHref` replaces every
    /// match. `value` is inserted as-is: no HTML escaping and no `$` group
    /// expansion. A document without a match is returned unchanged.
    pub fn apply<'a>(&self, document: &'a str, value: &str) -> Cow<'a, str> {
        match self {
            FragmentKind::ButtonText => BUTTON_TEXT_REGEX.replacen(document, 1, |caps: &Captures| {
                format!("{}{}{}", &caps[1], value, &caps[3])
            }),
            FragmentKind::BodyText => BODY_TEXT_REGEX.replacen(
                document,
                1,
                NoExpand(&format!("<p class='user-p'>{}</p>", value)),
            ),
            FragmentKind::DescriptionText => DESCRIPTION_TEXT_REGEX.replacen(
                document,
                1,
                NoExpand(&format!("<p class='center-p'>{}</p>", value)),
            ),
            FragmentKind::LinkHref => LINK_HREF_REGEX.replace_all(
                document,
                NoExpand(&format!("<a class='link shake' href='{}'", value)),
            ),
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            FragmentKind::ButtonText => &*BUTTON_TEXT_REGEX,
            FragmentKind::BodyText => &*BODY_TEXT_REGEX,
            FragmentKind::DescriptionText => &*DESCRIPTION_TEXT_REGEX,
            FragmentKind::LinkHref => &*LINK_HREF_REGEX,
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
