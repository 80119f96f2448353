//! HTML5 vocabulary.

use crate::config::MarkupConfig;

/// Document type declaration written before the `<html>` element
pub const DOCTYPE: &str = "<!DOCTYPE html>";

crate::markup_language! {
    /// Per-tag shortcuts for HTML documents.
    pub trait HtmlElements, const HTML_TAGS {
        a => "a",
        abbr => "abbr",
        address => "address",
        area => "area",
        article => "article",
        aside => "aside",
        audio => "audio",
        b => "b",
        base => "base",
        bdi => "bdi",
        bdo => "bdo",
        blockquote => "blockquote",
        body => "body",
        br => "br",
        button => "button",
        canvas => "canvas",
        caption => "caption",
        cite => "cite",
        code => "code",
        col => "col",
        colgroup => "colgroup",
        data => "data",
        datalist => "datalist",
        dd => "dd",
        del => "del",
        details => "details",
        dfn => "dfn",
        dialog => "dialog",
        div => "div",
        dl => "dl",
        dt => "dt",
        em => "em",
        embed => "embed",
        fieldset => "fieldset",
        figcaption => "figcaption",
        figure => "figure",
        footer => "footer",
        form => "form",
        h1 => "h1",
        h2 => "h2",
        h3 => "h3",
        h4 => "h4",
        h5 => "h5",
        h6 => "h6",
        head => "head",
        header => "header",
        hgroup => "hgroup",
        hr => "hr",
        html => "html",
        i => "i",
        iframe => "iframe",
        img => "img",
        input => "input",
        ins => "ins",
        kbd => "kbd",
        label => "label",
        legend => "legend",
        li => "li",
        link => "link",
        main => "main",
        map => "map",
        mark => "mark",
        menu => "menu",
        meta => "meta",
        meter => "meter",
        nav => "nav",
        noscript => "noscript",
        object => "object",
        ol => "ol",
        optgroup => "optgroup",
        option => "option",
        output => "output",
        p => "p",
        picture => "picture",
        pre => "pre",
        progress => "progress",
        q => "q",
        rp => "rp",
        rt => "rt",
        ruby => "ruby",
        s => "s",
        samp => "samp",
        script => "script",
        search => "search",
        section => "section",
        select => "select",
        slot => "slot",
        small => "small",
        source => "source",
        span => "span",
        strong => "strong",
        style => "style",
        sub => "sub",
        summary => "summary",
        sup => "sup",
        table => "table",
        tbody => "tbody",
        td => "td",
        template => "template",
        textarea => "textarea",
        tfoot => "tfoot",
        th => "th",
        thead => "thead",
        time => "time",
        title => "title",
        tr => "tr",
        track => "track",
        u => "u",
        ul => "ul",
        var => "var",
        video => "video",
        wbr => "wbr",
    }
}

/// HTML language with the default templates and a four space indent
pub fn config() -> MarkupConfig {
    MarkupConfig::new(HTML_TAGS.iter().copied()).with_preamble(DOCTYPE)
}
