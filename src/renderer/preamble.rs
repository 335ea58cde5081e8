//! Macro definitions the emitted markup relies on

/// Packages and macros for the default macro names.
///
/// Stylesheets may replace this text wholesale; the macro names used here
/// are the `default_macro` names of each role.
pub const PREAMBLE: &str = r#"\usepackage{adjustbox}
\usepackage{forest}
\usepackage{amsmath}

% Boxed/circled numbers, for drawing linked nodes:
\newcommand{\circled}[1]{\textcircled{\scalebox{0.8}{#1}}}
\renewcommand{\boxed}[1]{\raisebox{1pt}{\scalebox{0.65}{\fbox{#1}}}}

% STAG angle brackets:
\newlength{\abw}
\settowidth{\abw}{$\biggl<$}
\newsavebox{\mybox}
\newcommand{\bigabx}[1]{%
    \savebox{\mybox}{#1}%
    \resizebox{\abw}{\ht\mybox}{$\biggl<$}%
    \raisebox{.25\ht\mybox}{\usebox{\mybox}}%
    \resizebox{\abw}{\ht\mybox}{$\biggr>$}%
}

% STAG tree-pair from two bracketed trees
\newcommand{\stagrule}[2]{
    \bigabx{
        \begin{adjustbox}{valign=M}
            \begin{forest}
            #1
            \end{forest}
        \end{adjustbox}
        ,
        \begin{adjustbox}{valign=M}
            \begin{forest}
            #2
            \end{forest}
        \end{adjustbox}
    }
}

% Components of named pairs and MC-sets
\newcommand{\stagtree}[1]{%
    \begin{adjustbox}{valign=M}
        \begin{forest}
        #1
        \end{forest}
    \end{adjustbox}%
}
\newcommand{\mcset}[2]{$\Bigl\{$#1, #2$\Bigr\}$}
\newcommand{\namedmcset}[4]{$\Bigl\{$\textit{#1}: #2, \textit{#3}: #4$\Bigr\}$}

% STAG pairs of rendered components
\newcommand{\stagpair}[2]{\bigabx{#1 , #2}}
\newcommand{\namedsrcpair}[3]{\textit{#1}: \stagpair{#2}{#3}}
\newcommand{\namedpair}[4]{\bigabx{\textit{#1}: #2 , \textit{#3}: #4}}

% Forest format: makes branches connect at the bottom
% of a node:
\forestset{
    default preamble={
        for tree={
            parent anchor=south,
            child anchor=north,
            align=center,
        }
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stylesheet::MacroRole;

    #[test]
    fn test_preamble_defines_every_default_macro() {
        for role in MacroRole::ALL {
            let name = role.default_macro();
            let defined = PREAMBLE.contains(&format!("\\newcommand{{\\{}}}", name))
                || PREAMBLE.contains(&format!("\\renewcommand{{\\{}}}", name));
            assert!(defined, "preamble does not define \\{}", name);
        }
    }
}
