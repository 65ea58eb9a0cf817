pub mod board {
    use std::fmt;

    use clap::ValueEnum;
    use colored::Colorize;
    use serde::Serialize;

    use crate::board::Board;

    /// Which lower bound on the remaining slides orders the frontier.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, ValueEnum)]
    #[serde(rename_all = "lowercase")]
    pub enum HeuristicKind {
        #[default]
        Hamming,
        Manhattan,
    }

    impl fmt::Display for HeuristicKind {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                HeuristicKind::Hamming => write!(f, "hamming"),
                HeuristicKind::Manhattan => write!(f, "manhattan"),
            }
        }
    }

    pub trait Heuristic {
        fn get_heuristic(&self, kind: HeuristicKind) -> u32;
    }

    impl Heuristic for Board {
        fn get_heuristic(&self, kind: HeuristicKind) -> u32 {
            match kind {
                HeuristicKind::Hamming => self.hamming(),
                HeuristicKind::Manhattan => self.manhattan(),
            }
        }
    }

    pub trait DebugPrintable {
        /// Box-drawn grid of the board. With `manhattan_distance` set, each
        /// cell shows the tile's distance from its goal cell instead of the
        /// tile itself.
        fn render_grid(&self, manhattan_distance: bool) -> String;

        fn debug_print(&self, manhattan_distance: bool) {
            println!("{}", self.render_grid(manhattan_distance));
        }
    }

    fn border(n: usize, width: usize, left: char, mid: char, right: char) -> String {
        let segment = "─".repeat(width + 2);
        let mut line = String::new();
        line.push(left);
        for col in 0..n {
            line.push_str(&segment);
            if col < n - 1 {
                line.push(mid);
            }
        }
        line.push(right);
        line
    }

    impl DebugPrintable for Board {
        fn render_grid(&self, manhattan_distance: bool) -> String {
            let n = self.dimension();
            let width = (n * n - 1).to_string().len();
            let mut lines = vec![border(n, width, '┌', '┬', '┐')];

            for row in 0..n {
                let mut line = String::from("│");
                for col in 0..n {
                    let tile = self.tile(row, col);
                    let cell = if manhattan_distance {
                        let distance = self.distance(row, col);
                        let text = format!("{:>width$}", distance, width = width);
                        if distance == 0 { text.normal() } else { text.yellow() }
                    } else if tile == 0 {
                        " ".repeat(width).on_green()
                    } else {
                        format!("{:>width$}", tile, width = width).normal()
                    };
                    line.push_str(&format!(" {} │", cell));
                }
                lines.push(line);

                if row < n - 1 {
                    lines.push(border(n, width, '├', '┼', '┤'));
                }
            }

            lines.push(border(n, width, '└', '┴', '┘'));
            lines.join("\n")
        }
    }
}
