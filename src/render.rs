use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{Color, Print, Stylize},
};

use crate::generators::MazeResult;
use crate::maze::{Coord, Direction};

/// One square of the rendered picture: a cell, a wall, or the gap between two cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block {
    Wall,
    Path,
    Start,
    Exit,
}

impl Block {
    /// The width of each block when rendered, in character widths.
    pub const BLOCK_WIDTH: u16 = 2;
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Block::Wall => "⬜".with(Color::White),
            Block::Path => "  ".with(Color::Reset),
            Block::Start => "🟩".with(Color::Green),
            Block::Exit => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Block::BLOCK_WIDTH as usize,
                "Each block must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Block between a cell block and whatever lies on the given side of it. North is up.
fn gap((bx, by): (usize, usize), direction: Direction) -> (usize, usize) {
    match direction {
        Direction::West => (bx - 1, by),
        Direction::East => (bx + 1, by),
        Direction::North => (bx, by - 1),
        Direction::South => (bx, by + 1),
    }
}

/// Block picture of a maze, `(2*columns+1) x (2*rows+1)`, north row first.
pub struct Picture {
    blocks: Box<[Block]>,
    width: usize,
    height: usize,
}

impl Picture {
    pub fn new(result: &MazeResult) -> Self {
        let width = result.columns() as usize * 2 + 1;
        let height = result.rows() as usize * 2 + 1;
        let mut picture = Picture {
            blocks: vec![Block::Wall; width * height].into_boxed_slice(),
            width,
            height,
        };

        let rows = result.rows() as usize;
        let to_block = |(x, y): Coord| (x as usize * 2 - 1, (rows - y as usize) * 2 + 1);

        for (coord, _) in result.cells() {
            let (bx, by) = to_block(coord);
            picture.set(bx, by, Block::Path);
            for direction in Direction::ALL {
                if result.cell(coord).has_wall(direction) {
                    continue;
                }
                let (gx, gy) = gap((bx, by), direction);
                picture.set(gx, gy, Block::Path);
            }
        }

        let (sx, sy) = to_block(result.start());
        picture.set(sx, sy, Block::Start);
        let exit = result.exit();
        let (gx, gy) = gap(to_block(exit.cell), exit.direction);
        picture.set(gx, gy, Block::Exit);
        picture
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, x: usize, y: usize, block: Block) {
        self.blocks[y * self.width + x] = block;
    }

    pub fn get(&self, x: usize, y: usize) -> Block {
        self.blocks[y * self.width + x]
    }

    /// Writes the picture, one line per block row.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in self.blocks.chunks(self.width) {
            for block in row {
                queue!(out, Print(block))?;
            }
            queue!(out, Print("\r\n"))?;
        }
        out.flush()
    }
}
