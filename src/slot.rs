use crate::key::Signed;

/// Where a slot points: at its value in dense storage, or at the next
/// free slot when it is not in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Link<I> {
	Occupied { position: I },
	Vacant { next: Option<I> },
}

/// One record of the sparse table. `link` belongs to the slot index,
/// while `owner` belongs to the dense position of the same number and
/// names the slot that currently claims it.
#[derive(Clone, Debug)]
pub(crate) struct Slot<I> {
	pub link: Link<I>,
	pub owner: Option<I>,
}

impl<I: Signed> Slot<I> {
	pub fn occupied(position: I) -> Self {
		Self {
			link: Link::Occupied { position },
			owner: Some(position),
		}
	}

	#[inline]
	pub fn position(&self) -> Option<I> {
		match self.link {
			Link::Occupied { position } => Some(position),
			Link::Vacant { .. } => None,
		}
	}

	pub fn set(&mut self, position: I) -> Option<I> {
		let old = core::mem::replace(&mut self.link, Link::Occupied { position });

		if let Link::Vacant { next } = old {
			next
		} else {
			unreachable!("`Slot::set` called on occupied slot")
		}
	}

	pub fn unset(&mut self, next: Option<I>) -> I {
		let old = core::mem::replace(&mut self.link, Link::Vacant { next });

		if let Link::Occupied { position } = old {
			position
		} else {
			unreachable!("`Slot::unset` called on vacant slot")
		}
	}
}

#[cfg(test)]
mod test {
	use super::{Link, Slot};

	#[test]
	fn set_then_unset() {
		let mut slot = Slot::<i32>::occupied(3);

		assert_eq!(slot.unset(Some(7)), 3);
		assert_eq!(slot.link, Link::Vacant { next: Some(7) });
		assert_eq!(slot.position(), None);

		assert_eq!(slot.set(0), Some(7));
		assert_eq!(slot.position(), Some(0));
		assert_eq!(slot.owner, Some(3));
	}
}
