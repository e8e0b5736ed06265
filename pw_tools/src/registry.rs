// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>

use pw_tool_lib::fuzzy::fuzzy_match;

// Matches the landing page search behaviour.
pub const SEARCH_RATIO: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Encoding,
    Text,
    Utilities,
    Games,
    Design,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Encoding => "encoding",
            Category::Text => "text",
            Category::Utilities => "utilities",
            Category::Games => "games",
            Category::Design => "design",
        }
    }
}

#[derive(Debug)]
pub struct Tool {
    pub name: &'static str,
    pub title: &'static str,
    pub keywords: &'static str,
    pub category: Category,
    pub hidden: bool,
}

pub const TOOLS: &[Tool] = &[
    Tool {
        name: "base64-encode",
        title: "Base64 Encode",
        keywords: "encode,base64,tool",
        category: Category::Encoding,
        hidden: false,
    },
    Tool {
        name: "base64-decode",
        title: "Base64 Decode",
        keywords: "decode,base64,tool",
        category: Category::Encoding,
        hidden: false,
    },
    Tool {
        name: "url-encode",
        title: "URL Encode",
        keywords: "encode,url,tool",
        category: Category::Encoding,
        hidden: false,
    },
    Tool {
        name: "url-decode",
        title: "URL Decode",
        keywords: "decode,url,tool",
        category: Category::Encoding,
        hidden: false,
    },
    Tool {
        name: "strip-lines",
        title: "Extra Line Removal",
        keywords: "text,whitespace,lines,tool",
        category: Category::Text,
        hidden: false,
    },
    Tool {
        name: "count",
        title: "Word Counter",
        keywords: "word,count,tool",
        category: Category::Text,
        hidden: false,
    },
    Tool {
        name: "draw-odds",
        title: "Deck Draw Odds",
        keywords: "deck,cards,probability,odds,tool",
        category: Category::Games,
        hidden: false,
    },
    Tool {
        name: "pair-odds",
        title: "Multi Card Probability",
        keywords: "cards,probability,pair,odds,tool",
        category: Category::Games,
        hidden: false,
    },
    Tool {
        name: "hand-odds",
        title: "Card Assumption",
        keywords: "cards,probability,assumption,tool",
        category: Category::Games,
        hidden: false,
    },
    Tool {
        name: "deck-normalize",
        title: "Sim Code Converter",
        keywords: "sim,code,convert,tool,one-piece-tcg,otcg",
        category: Category::Utilities,
        hidden: true,
    },
    Tool {
        name: "deck-links",
        title: "Deckbuilder Links",
        keywords: "deck,deckbuilder,links,egman,cardkaizoku,gumgum,tool,one-piece-tcg,otcg",
        category: Category::Games,
        hidden: true,
    },
    Tool {
        name: "deck-convert",
        title: "Multi-Deck Link Converter",
        keywords: "deck,deckbuilder,links,convert,tool,one-piece-tcg,otcg",
        category: Category::Utilities,
        hidden: true,
    },
    Tool {
        name: "deck-batch",
        title: "Multi-Deck Parser",
        keywords: "deck,decks,batch,parse,tool,one-piece-tcg,otcg",
        category: Category::Utilities,
        hidden: true,
    },
    Tool {
        name: "diff",
        title: "Text Compare",
        keywords: "text,compare,diff,tool",
        category: Category::Text,
        hidden: false,
    },
    Tool {
        name: "opacity",
        title: "Opacifier",
        keywords: "color,opacity,alpha,hex,rgba,transparency,tool",
        category: Category::Design,
        hidden: false,
    },
    Tool {
        name: "jwt",
        title: "JWT Debugger",
        keywords: "jwt,json,web,token,decode,debug,auth,tool",
        category: Category::Encoding,
        hidden: false,
    },
];

/// Tools whose title, name or keywords fuzzily match `pattern`.
/// Hidden tools only show up when `include_hidden` is set.
pub fn matching_tools(pattern: &str, include_hidden: bool) -> Vec<&'static Tool> {
    TOOLS
        .iter()
        .filter(|tool| include_hidden || !tool.hidden)
        .filter(|tool| {
            fuzzy_match(tool.title, pattern, SEARCH_RATIO)
                || fuzzy_match(tool.name, pattern, SEARCH_RATIO)
                || fuzzy_match(tool.keywords, pattern, SEARCH_RATIO)
        })
        .collect()
}

pub fn print_tools(tools: &[&Tool]) {
    for tool in tools {
        println!(
            "{:<16} {:<28} {}",
            tool.name,
            tool.title,
            tool.category.label()
        );
    }
}
