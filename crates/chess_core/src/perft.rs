use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Counts the leaf positions reachable from `pos` in exactly `depth` plies.
///
/// Used to validate move generation against published node counts.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    fn inner(pos: &mut Position, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(pos, buf);
        if rest.is_empty() {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let undo = pos.make_move(mv);
            nodes += inner(pos, rest);
            pos.unmake_move(mv, undo);
        }
        nodes
    }

    // One move buffer per remaining ply, reused across siblings.
    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, &mut layers[..])
}
