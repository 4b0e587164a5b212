use std::path::Path;

/// Per-language scanning tables: how comments start, which keywords and
/// operators count as decision points, how function declarations are
/// recognized, and how bodies are scoped.
pub struct Language {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub line_comments: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub operators: &'static [&'static str],
    pub function_markers: &'static [&'static str],
    pub brace_scoped: bool,
}

static RUST: Language = Language {
    name: "Rust",
    extensions: &["rs"],
    line_comments: &["//"],
    keywords: &["else if", "if", "for", "while", "loop", "match"],
    operators: &["&&", "||"],
    function_markers: &["fn "],
    brace_scoped: true,
};

static PYTHON: Language = Language {
    name: "Python",
    extensions: &["py"],
    line_comments: &["#"],
    keywords: &["elif", "if", "for", "while", "except", "and", "or"],
    operators: &[],
    function_markers: &["async def ", "def "],
    brace_scoped: false,
};

static JAVASCRIPT: Language = Language {
    name: "JavaScript",
    extensions: &["js", "jsx"],
    line_comments: &["//"],
    keywords: &[
        "else if", "if", "for", "while", "do", "switch", "case", "catch",
    ],
    operators: &["&&", "||", "??"],
    function_markers: &["function "],
    brace_scoped: true,
};

static TYPESCRIPT: Language = Language {
    name: "TypeScript",
    extensions: &["ts", "tsx"],
    line_comments: &["//"],
    keywords: &[
        "else if", "if", "for", "while", "do", "switch", "case", "catch",
    ],
    operators: &["&&", "||", "??"],
    function_markers: &["function "],
    brace_scoped: true,
};

// C, C++, Objective-C, C#, and Java share the call-like declaration
// heuristic (no explicit function keyword to anchor on).
static C: Language = Language {
    name: "C",
    extensions: &["c", "h"],
    line_comments: &["//"],
    keywords: &[
        "else if", "if", "for", "while", "do", "switch", "case", "catch",
    ],
    operators: &["&&", "||"],
    function_markers: &[],
    brace_scoped: true,
};

static CPP: Language = Language {
    name: "C++",
    extensions: &["cc", "cpp", "hpp"],
    line_comments: &["//"],
    keywords: &[
        "else if", "if", "for", "while", "do", "switch", "case", "catch",
    ],
    operators: &["&&", "||"],
    function_markers: &[],
    brace_scoped: true,
};

static OBJC: Language = Language {
    name: "Objective-C",
    extensions: &["m", "mm"],
    line_comments: &["//"],
    keywords: &[
        "else if", "if", "for", "while", "do", "switch", "case", "catch",
    ],
    operators: &["&&", "||"],
    function_markers: &[],
    brace_scoped: true,
};

static CSHARP: Language = Language {
    name: "C#",
    extensions: &["cs"],
    line_comments: &["//"],
    keywords: &[
        "else if", "if", "for", "foreach", "while", "do", "switch", "case", "catch",
    ],
    operators: &["&&", "||", "??"],
    function_markers: &[],
    brace_scoped: true,
};

static JAVA: Language = Language {
    name: "Java",
    extensions: &["java"],
    line_comments: &["//"],
    keywords: &[
        "else if", "if", "for", "while", "do", "switch", "case", "catch",
    ],
    operators: &["&&", "||"],
    function_markers: &[],
    brace_scoped: true,
};

static GO: Language = Language {
    name: "Go",
    extensions: &["go"],
    line_comments: &["//"],
    keywords: &["else if", "if", "for", "switch", "case", "select"],
    operators: &["&&", "||"],
    function_markers: &["func "],
    brace_scoped: true,
};

static KOTLIN: Language = Language {
    name: "Kotlin",
    extensions: &["kt", "kts"],
    line_comments: &["//"],
    keywords: &["else if", "if", "for", "while", "when", "catch"],
    operators: &["&&", "||"],
    function_markers: &["fun "],
    brace_scoped: true,
};

static SWIFT: Language = Language {
    name: "Swift",
    extensions: &["swift"],
    line_comments: &["//"],
    keywords: &[
        "else if", "if", "for", "while", "switch", "case", "catch", "guard",
    ],
    operators: &["&&", "||"],
    function_markers: &["func "],
    brace_scoped: true,
};

static SCALA: Language = Language {
    name: "Scala",
    extensions: &["scala"],
    line_comments: &["//"],
    keywords: &["else if", "if", "for", "while", "match", "case", "catch"],
    operators: &["&&", "||"],
    function_markers: &["def "],
    brace_scoped: true,
};

static RUBY: Language = Language {
    name: "Ruby",
    extensions: &["rb"],
    line_comments: &["#"],
    keywords: &[
        "elsif", "if", "unless", "for", "while", "until", "when", "rescue",
    ],
    operators: &["&&", "||"],
    function_markers: &["def "],
    brace_scoped: false,
};

static PHP: Language = Language {
    name: "PHP",
    extensions: &["php"],
    line_comments: &["//", "#"],
    keywords: &[
        "elseif", "else if", "if", "for", "foreach", "while", "do", "switch", "case", "catch",
    ],
    operators: &["&&", "||", "??"],
    function_markers: &["function "],
    brace_scoped: true,
};

static LUA: Language = Language {
    name: "Lua",
    extensions: &["lua"],
    line_comments: &["--"],
    keywords: &["elseif", "if", "for", "while"],
    operators: &[],
    function_markers: &["function "],
    brace_scoped: false,
};

// Shell functions have no declaration keyword the line scanner can anchor
// on, so .sh files yield no functions; they still count for LOC share.
static SHELL: Language = Language {
    name: "Shell",
    extensions: &["sh"],
    line_comments: &["#"],
    keywords: &["elif", "if", "for", "while", "until", "case"],
    operators: &["&&", "||"],
    function_markers: &[],
    brace_scoped: false,
};

static POWERSHELL: Language = Language {
    name: "PowerShell",
    extensions: &["ps1"],
    line_comments: &["#"],
    keywords: &["elseif", "if", "for", "foreach", "while", "switch"],
    operators: &["-and", "-or"],
    function_markers: &["function "],
    brace_scoped: true,
};

static LANGUAGES: &[&Language] = &[
    &RUST,
    &PYTHON,
    &JAVASCRIPT,
    &TYPESCRIPT,
    &C,
    &CPP,
    &OBJC,
    &CSHARP,
    &JAVA,
    &GO,
    &KOTLIN,
    &SWIFT,
    &SCALA,
    &RUBY,
    &PHP,
    &LUA,
    &SHELL,
    &POWERSHELL,
];

/// Look up the scanning table for a file by extension (case-insensitive).
pub fn language_for(path: &Path) -> Option<&'static Language> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    LANGUAGES
        .iter()
        .find(|lang| lang.extensions.contains(&ext.as_str()))
        .copied()
}

#[cfg(test)]
#[path = "markers_test.rs"]
mod tests;
