#![allow(dead_code)]

use prolom::alphabet::Alphabet;
use prolom::scorer::{corpus, TransitionMatrix};

/// Reference corpus for building bigram statistics in tests. Ordinary
/// English prose, long enough that every common letter pair shows up.
pub const REFERENCE_TEXT: &str = "The river ran slow and brown past the old mill, and the miller stood \
on the stone bridge to watch the morning come up over the water. He had \
lived beside the river all his life, and he knew the sound of it the way \
other people know the voices of their own children. When the rain fell in \
the hills the river rose and carried branches and straw down to the weir, \
and when the summer burned long and dry the water fell away from the banks \
and left the smooth stones bare and white in the sun.
In the village the baker lit his ovens before first light, and the smell \
of warm bread drifted along the narrow street to the square where the \
market carts were already standing. Farmers came in from the low fields \
with cheese and apples and young birds in wooden cages, and the women of \
the town walked from stall to stall with baskets on their arms, talking of \
the weather and the price of grain and the health of their neighbours. A \
dog slept in the shadow of the well and nobody troubled him.
The schoolmistress opened the school at eight and the children came running over \
the bridge with their books held against the wind. She taught them letters \
and numbers and the names of the rivers and mountains of the whole country, \
and in the afternoon she read to them from a thick green book of old \
stories, tales of ships and storms and distant islands where the trees grew \
taller than church towers. The children listened with their chins in their \
hands and watched the dust turn in the long bars of light.
In the evening the men came back from the fields and washed at the pump in \
the yard, and the houses filled with the noise of plates and fire and \
talk. Lamps were lit one by one along the street until the whole village \
lay in a string of small warm lights between the dark hills and the dark \
water. The miller walked out once more onto the bridge and stood a while \
listening to the weir, and then he went in and shut his door, and the \
river went on alone under the stars, saying the one long word it had been \
saying since before the village had a name.";

pub fn init_logs() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn default_alphabet() -> Alphabet {
    Alphabet::default()
}

/// Four-symbol alphabet for hand-checkable scorer tests.
pub fn tiny_alphabet() -> Alphabet {
    Alphabet::new("ABC_").unwrap()
}

/// Matrix where every pair weighs the same, so every key scores alike.
pub fn uniform_matrix(n: usize, weight: f32) -> TransitionMatrix {
    TransitionMatrix::from_log_weights(n, vec![weight; n * n]).unwrap()
}

/// Matrix with weight(i, j) = i * 10 + j, handy for exact score assertions.
pub fn indexed_matrix(n: usize) -> TransitionMatrix {
    let weights = (0..n * n)
        .map(|k| ((k / n) * 10 + k % n) as f32)
        .collect();
    TransitionMatrix::from_log_weights(n, weights).unwrap()
}

pub fn reference_matrix(alphabet: &Alphabet) -> TransitionMatrix {
    corpus::from_reference_text(REFERENCE_TEXT, alphabet).unwrap()
}
