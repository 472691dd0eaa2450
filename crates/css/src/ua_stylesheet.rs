//! The built-in user-agent stylesheet, applied before any author rules.

pub const USER_AGENT_CSS: &str = r#"
p, div, ul, ol, li, h1, h2, h3, h4, h5, h6, blockquote, pre,
article, section, header, footer, main, nav, aside, table, form {
    display: block;
}
h1 { font-size: 32px; }
h2 { font-size: 24px; }
h3 { font-size: 18.72px; }
strong, b { font-weight: 700; }
em, i { font-style: italic; }
a { text-decoration: underline; color: blue; }
ul, ol { padding-left: 40px; }
"#;
