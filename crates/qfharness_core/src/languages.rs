//! Target-language vocabulary for harness templates.
//!
//! Each language carries the comment prefix its template uses in front of marker tokens, the imports every
//! generated harness needs, and the template/output file names the generation step reads and writes.

use crate::registry::{self, ItemInfo};

/// Stable identifier for supported harness languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Java,
    CSharp,
    JavaScript,
    Python,
    Cpp,
}

/// Metadata entry for a language, extending the shared [`ItemInfo`] shape.
#[derive(Debug, Clone, Copy)]
pub struct LanguageInfo {
    pub item: ItemInfo<LanguageId>,
    /// Comment prefix written before a marker token (e.g. `/// {{TESTS}}`).
    pub marker_prefix: &'static str,
    /// Imports every generated harness starts from.
    pub default_imports: &'static [&'static str],
    /// Conventional template file name.
    pub template_file: &'static str,
    /// Conventional output path of the filled harness.
    pub output_file: &'static str,
}

/// Registry of harness languages.
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo {
        item: ItemInfo {
            id: LanguageId::Java,
            canonical: "java",
            aliases: &[],
            description: "Java harness using json-simple.",
        },
        marker_prefix: "/// ",
        default_imports: &[
            "import java.io.FileNotFoundException;",
            "import java.io.FileReader;",
            "import java.io.FileWriter;",
            "import java.io.IOException;",
            "import org.json.simple.JSONArray;",
            "import org.json.simple.JSONObject;",
            "import org.json.simple.parser.JSONParser;",
            "import org.json.simple.parser.ParseException;",
        ],
        template_file: "Test.template.java",
        output_file: "src/main/java/Test.java",
    },
    LanguageInfo {
        item: ItemInfo {
            id: LanguageId::CSharp,
            canonical: "csharp",
            aliases: &["cs", "c#"],
            description: "C# harness using Newtonsoft.Json.",
        },
        marker_prefix: "/// ",
        default_imports: &["using System.IO;", "using System;", "using Newtonsoft.Json.Linq;"],
        template_file: "Test.template.cs",
        output_file: "Test.cs",
    },
    LanguageInfo {
        item: ItemInfo {
            id: LanguageId::JavaScript,
            canonical: "javascript",
            aliases: &["js", "node"],
            description: "Node.js harness.",
        },
        marker_prefix: "/// ",
        default_imports: &["const fs = require(\"fs\");"],
        template_file: "test.template.js",
        output_file: "test.js",
    },
    LanguageInfo {
        item: ItemInfo {
            id: LanguageId::Python,
            canonical: "python",
            aliases: &["py"],
            description: "Python 3 harness.",
        },
        marker_prefix: "# ",
        default_imports: &["import json", "import os.path"],
        template_file: "test.template.py",
        output_file: "test.py",
    },
    LanguageInfo {
        item: ItemInfo {
            id: LanguageId::Cpp,
            canonical: "cpp",
            aliases: &["c++"],
            description: "C++ harness using nlohmann::json.",
        },
        marker_prefix: "/// ",
        default_imports: &["#include \"json.hpp\"", "#include <fstream>", "#include <iostream>"],
        template_file: "test.template.cpp",
        output_file: "test.cpp",
    },
];

/// Resolve a language name or alias (case-insensitive) to its id.
pub fn from_str(name: &str) -> Option<LanguageId> {
    let lowered = name.trim().to_ascii_lowercase();
    let items: Vec<ItemInfo<LanguageId>> = LANGUAGES.iter().map(|l| l.item).collect();
    registry::resolve(&items, &lowered)
}

/// Return the canonical language name.
pub fn as_str(id: LanguageId) -> &'static str {
    info_for(id).item.canonical
}

/// Return the metadata entry for a language.
///
/// # Panics
///
/// Panics if `LANGUAGES` is missing a row for `id`.
pub fn info_for(id: LanguageId) -> &'static LanguageInfo {
    LANGUAGES
        .iter()
        .find(|l| l.item.id == id)
        .unwrap_or_else(|| panic!("INVARIANT: language row missing for {id:?}"))
}

/// Return the comment prefix placed before marker tokens in templates of this language.
pub fn marker_prefix(id: LanguageId) -> &'static str {
    info_for(id).marker_prefix
}
