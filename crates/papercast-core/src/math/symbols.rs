//! Spoken-word tables for LaTeX math commands
//!
//! Command names are stored without the leading backslash.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Commands spoken as a fixed phrase, consuming no argument.
    pub(crate) static ref SYMBOLS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.extend(GREEK_LETTERS.iter().copied());
        m.extend(OPERATORS.iter().copied());
        m
    };

    static ref GREEK_LETTERS: Vec<(&'static str, &'static str)> = vec![
        // Lowercase
        ("alpha", "alpha"), ("beta", "beta"), ("gamma", "gamma"), ("delta", "delta"),
        ("epsilon", "epsilon"), ("zeta", "zeta"), ("eta", "eta"), ("theta", "theta"),
        ("iota", "iota"), ("kappa", "kappa"), ("lambda", "lambda"), ("mu", "mu"),
        ("nu", "nu"), ("xi", "xi"), ("pi", "pi"), ("rho", "rho"),
        ("sigma", "sigma"), ("tau", "tau"), ("upsilon", "upsilon"), ("phi", "phi"),
        ("chi", "chi"), ("psi", "psi"), ("omega", "omega"),
        // Uppercase
        ("Gamma", "Gamma"), ("Delta", "Delta"), ("Theta", "Theta"), ("Lambda", "Lambda"),
        ("Xi", "Xi"), ("Pi", "Pi"), ("Sigma", "Sigma"), ("Upsilon", "Upsilon"),
        ("Phi", "Phi"), ("Psi", "Psi"), ("Omega", "Omega"),
        // Variants
        ("varepsilon", "epsilon"), ("varphi", "phi"), ("vartheta", "theta"),
        ("varrho", "rho"), ("varsigma", "sigma"), ("varpi", "pi"),
        // Letter-like
        ("ell", "ell"), ("hbar", "h bar"), ("aleph", "aleph"),
    ];

    static ref OPERATORS: Vec<(&'static str, &'static str)> = vec![
        // Arithmetic
        ("cdot", "times"), ("times", "times"), ("div", "divided by"),
        ("pm", "plus or minus"), ("mp", "minus or plus"), ("ast", "star"),
        ("circ", "composed with"),
        // Relations
        ("leq", "less than or equal to"), ("le", "less than or equal to"),
        ("geq", "greater than or equal to"), ("ge", "greater than or equal to"),
        ("neq", "not equal to"), ("ne", "not equal to"),
        ("lt", "less than"), ("gt", "greater than"),
        ("ll", "much less than"), ("gg", "much greater than"),
        ("approx", "approximately"), ("sim", "is similar to"), ("simeq", "is approximately"),
        ("equiv", "is equivalent to"), ("propto", "is proportional to"),
        ("mid", "given"),
        // Calculus and logic
        ("infty", "infinity"), ("partial", "partial"), ("nabla", "nabla"),
        ("forall", "for all"), ("exists", "there exists"), ("neg", "not"),
        ("land", "and"), ("lor", "or"), ("wedge", "and"), ("vee", "or"),
        // Sets
        ("in", "in"), ("notin", "not in"), ("subset", "subset of"),
        ("subseteq", "subset of or equal to"), ("supset", "superset of"),
        ("cup", "union"), ("cap", "intersection"), ("emptyset", "the empty set"),
        ("setminus", "minus"),
        // Arrows
        ("to", "to"), ("rightarrow", "arrow"), ("Rightarrow", "implies"),
        ("leftarrow", "left arrow"), ("leftrightarrow", "if and only if"),
        ("Leftrightarrow", "if and only if"), ("iff", "if and only if"),
        ("mapsto", "maps to"),
        // Ellipses
        ("ldots", "and so on"), ("cdots", "and so on"), ("dots", "and so on"),
        // Named functions
        ("log", "log"), ("ln", "natural log of"), ("exp", "e to the power of"),
        ("sin", "sine"), ("cos", "cosine"), ("tan", "tangent"),
        ("max", "max"), ("min", "min"), ("arg", "arg"),
        ("argmax", "arg max"), ("argmin", "arg min"), ("sup", "supremum"), ("inf", "infimum"),
        ("lim", "the limit of"), ("det", "determinant of"), ("mod", "mod"),
        ("Pr", "probability of"), ("top", "transpose"), ("prime", "prime"),
    ];

    /// Decorations spoken after their argument ("x hat").
    pub(crate) static ref ACCENTS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("hat", "hat");
        m.insert("widehat", "hat");
        m.insert("bar", "bar");
        m.insert("overline", "bar");
        m.insert("tilde", "tilde");
        m.insert("widetilde", "tilde");
        m.insert("vec", "vector");
        m.insert("dot", "dot");
        m.insert("ddot", "double dot");
        m.insert("underline", "underline");
        m
    };

    /// Text commands: argument spoken as words.
    pub(crate) static ref TEXT_STYLES: HashSet<&'static str> = [
        "text", "textrm", "textbf", "textit", "textsf", "texttt", "emph",
        "mathrm", "operatorname", "mbox",
    ].into_iter().collect();

    /// Math font commands: argument spoken as math.
    pub(crate) static ref MATH_STYLES: HashSet<&'static str> = [
        "mathbf", "mathit", "mathcal", "mathbb", "mathsf", "mathfrak",
        "boldsymbol", "bm",
    ].into_iter().collect();

    /// Delimiter sizing: the following delimiter is swallowed.
    pub(crate) static ref SIZING: HashSet<&'static str> = [
        "left", "right", "middle",
        "big", "Big", "bigg", "Bigg",
        "bigl", "bigr", "Bigl", "Bigr", "biggl", "biggr", "Biggl", "Biggr",
    ].into_iter().collect();

    /// Spacing and delimiter commands that are simply silent.
    pub(crate) static ref SILENT: HashSet<&'static str> = [
        "quad", "qquad", "enspace", "thinspace", "nonumber", "notag",
        "displaystyle", "textstyle", "scriptstyle",
        "langle", "rangle", "lvert", "rvert", "lVert", "rVert", "vert", "Vert",
        "lfloor", "rfloor", "lceil", "rceil", "limits", "nolimits",
    ].into_iter().collect();
}
