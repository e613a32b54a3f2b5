// Create the Error, ErrorKind, ResultExt, and Result types.
// Invariant violations inside the generator panic instead; these are the conditions a caller
// can run into with bad input.
use error_chain::*;

error_chain! {
    errors {
        InvalidDimensions(width: usize, depth: usize) {
            description("maze dimensions must be positive")
            display("invalid maze dimensions {} x {}: width and depth must be at least 1", width, depth)
        }
        GridTooLarge(width: usize, depth: usize) {
            description("maze dimensions are too large")
            display("maze of {} x {} cells cannot be addressed", width, depth)
        }
        EmptyRoomPalette {
            description("no room settings to choose from")
            display("the room settings palette is empty")
        }
        GenerationIncomplete(remaining: usize) {
            description("maze generation has not finished")
            display("maze generation has not finished, {} active cells remain", remaining)
        }
    }
}
