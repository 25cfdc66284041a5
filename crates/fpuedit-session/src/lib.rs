#![forbid(unsafe_code)]

//! Edit-session core for a debugger's x87 register editor.
//!
//! An [`EditSession`] owns the single ground-truth [`Float80`] for one edit
//! of one register and keeps two textual views of it consistent: a
//! decimal/scientific view and a raw hex view. Each edit handler mutates
//! ground truth (when the typed text is acceptable) and regenerates only the
//! *other* view's text, so there is no observer cycle to guard against and
//! the view being typed into is never reformatted under the cursor.
//!
//! The dialog shell and the live register are external collaborators: the
//! shell renders the returned strings, and the register is reached only
//! through the [`RegisterBinding`] seam at session start and commit.

mod binding;
mod session;

pub use fpuedit_float80::{Float80, HexError};

pub use crate::binding::{InMemoryRegister, RegisterBinding};
pub use crate::session::{EditSession, EditView};
