use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random generation around a guaranteed-safe first move, reproducible
/// from its seed.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
    policy: PlacementPolicy,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, policy: PlacementPolicy) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
            policy,
        }
    }

    pub fn from_entropy(policy: PlacementPolicy) -> Self {
        Self::new(rand::random(), policy)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn sample_rejecting(&mut self, board: &Board, safe: Coord2) -> Vec<Coord2> {
        let (rows, cols) = board.size();
        let target = usize::from(board.mine_count());
        let mut taken: Array2<bool> = Array2::default(cell_index(board.size()));
        let mut mines = Vec::with_capacity(target);
        let mut rejected = 0usize;

        while mines.len() < target {
            let candidate = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
            if in_safe_zone(safe, candidate) || taken[cell_index(candidate)] {
                rejected += 1;
                continue;
            }
            taken[cell_index(candidate)] = true;
            mines.push(candidate);
        }

        log::trace!(
            "Rejection sampling placed {} mines, {} candidates rejected",
            mines.len(),
            rejected
        );
        mines
    }

    fn sample_shuffled(&mut self, board: &Board, safe: Coord2) -> Vec<Coord2> {
        let target = usize::from(board.mine_count());
        let mut eligible: Vec<_> = board
            .iter_coords()
            .filter(|&coords| !in_safe_zone(safe, coords))
            .collect();
        let (chosen, _) = eligible.partial_shuffle(&mut self.rng, target);
        chosen.to_vec()
    }
}

impl MineGenerator for RandomMineGenerator {
    fn place_mines(&mut self, board: &mut Board, safe: Coord2) -> Result<()> {
        let safe = board.validate_coords(safe)?;
        if board.mines_placed() {
            return Err(GameError::MinesAlreadyPlaced);
        }
        // guards the sampling loop below against running forever
        if board.mine_count() > eligible_cell_count(board, safe) {
            log::warn!(
                "Cannot keep {:?} safe with {} mines on a {:?} board",
                safe,
                board.mine_count(),
                board.size()
            );
            return Err(GameError::TooManyMines);
        }

        log::debug!(
            "Placing {} mines around {:?} with {:?}, seed {}",
            board.mine_count(),
            safe,
            self.policy,
            self.seed
        );
        let mines = match self.policy {
            PlacementPolicy::RejectionSampling => self.sample_rejecting(board, safe),
            PlacementPolicy::Shuffle => self.sample_shuffled(board, safe),
        };
        board.set_mines(&mines)
    }
}
