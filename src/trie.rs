//! Prefix tree storing words as sequences of opaque symbols
//!
//! Every node exclusively owns its children, so dropping a branch releases
//! the whole subtree. A non-root node only exists while some stored word
//! passes through it.

use std::collections::BTreeMap;

/// Words must contain at least one symbol to be stored or queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("word must contain at least one symbol")]
pub struct EmptyWordError;

/// Read-only view over a tree of words
///
/// This is all the fuzzy matcher needs to know about a trie.
pub trait Traverse {
	/// Symbol labelling the edge from a node to one of its children
	type Symbol: Copy + PartialEq;

	/// Whether the path leading to this node spells a stored word
	fn is_terminal(&self) -> bool;

	/// Children of this node along with the symbol leading to them
	fn children(&self) -> impl Iterator<Item = (Self::Symbol, &Self)> + '_;
}

/// Set of words sharing nodes along their common prefixes
#[derive(Debug, Clone)]
pub struct Trie<S> {
	/// Never terminal, the empty word cannot be stored
	root: TrieNode<S>,
	/// Number of stored words
	len: usize,
}

impl<S> Default for Trie<S> {
	fn default() -> Self {
		Self {
			root: TrieNode::default(),
			len: 0,
		}
	}
}

/// One position in the symbol sequence space
#[derive(Debug, Clone)]
pub struct TrieNode<S> {
	/// Ordered so that traversal happens in symbol order
	children: BTreeMap<S, Self>,
	/// The path from the root spells a stored word
	terminal: bool,
}

impl<S> Default for TrieNode<S> {
	fn default() -> Self {
		Self {
			children: BTreeMap::default(),
			terminal: false,
		}
	}
}

impl<S: Ord + Copy> Traverse for TrieNode<S> {
	type Symbol = S;

	fn is_terminal(&self) -> bool {
		self.terminal
	}

	fn children(&self) -> impl Iterator<Item = (S, &Self)> + '_ {
		self.children.iter().map(|(symbol, child)| (*symbol, child))
	}
}

impl<S: Ord + Copy> TrieNode<S> {
	/// Builds the detached chain of nodes spelling `rest`, ending on a terminal node
	fn branch(rest: &[S]) -> Self {
		let mut node = Self {
			children: BTreeMap::default(),
			terminal: true,
		};
		for symbol in rest.iter().rev() {
			let mut parent = Self::default();
			parent.children.insert(*symbol, node);
			node = parent;
		}
		node
	}

	/// Counts this node and all of its descendants
	fn count(&self) -> usize {
		1 + self.children.values().map(Self::count).sum::<usize>()
	}

	/// Pushes every word below this node, `prefix` being the path leading to it
	fn collect_words(&self, prefix: &mut Vec<S>, words: &mut Vec<Vec<S>>) {
		if self.terminal {
			words.push(prefix.clone());
		}
		for (symbol, child) in &self.children {
			prefix.push(*symbol);
			child.collect_words(prefix, words);
			prefix.pop();
		}
	}
}

impl<S: Ord + Copy> Trie<S> {
	/// Number of words currently stored
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Whether no word is stored
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Entry point for traversals
	pub const fn root(&self) -> &TrieNode<S> {
		&self.root
	}

	/// Number of nodes in the tree, root included
	pub fn node_count(&self) -> usize {
		self.root.count()
	}

	/// Stores `word`, returns `false` if it was already there
	///
	/// Missing nodes are built as a detached branch and linked to the tree
	/// in a single step.
	///
	/// # Errors
	///
	/// Fails when `word` is empty.
	pub fn insert(&mut self, word: &[S]) -> Result<bool, EmptyWordError> {
		if word.is_empty() {
			return Err(EmptyWordError);
		}

		let shared = self.shared_depth(word);

		let mut current = &mut self.root;
		for symbol in &word[..shared] {
			current = current.children.entry(*symbol).or_default();
		}

		let inserted = if shared == word.len() {
			!std::mem::replace(&mut current.terminal, true)
		} else {
			current
				.children
				.insert(word[shared], TrieNode::branch(&word[shared + 1..]));
			true
		};

		if inserted {
			self.len += 1;
		}
		Ok(inserted)
	}

	/// Whether `word` is stored as a full word
	///
	/// # Errors
	///
	/// Fails when `word` is empty.
	pub fn search(&self, word: &[S]) -> Result<bool, EmptyWordError> {
		if word.is_empty() {
			return Err(EmptyWordError);
		}
		Ok(self.node(word).is_some_and(|node| node.terminal))
	}

	/// Whether some stored word starts with `prefix`
	pub fn contains_prefix(&self, prefix: &[S]) -> bool {
		if prefix.is_empty() {
			return !self.is_empty();
		}
		self.node(prefix).is_some()
	}

	/// Removes `word` and every node that only existed for its sake
	///
	/// Returns `false` when the word was not stored, leaving the tree untouched.
	///
	/// # Errors
	///
	/// Fails when `word` is empty.
	pub fn remove(&mut self, word: &[S]) -> Result<bool, EmptyWordError> {
		if word.is_empty() {
			return Err(EmptyWordError);
		}

		let Some(target) = self.node(word) else {
			return Ok(false);
		};
		if !target.terminal {
			return Ok(false);
		}

		if target.children.is_empty() {
			// Unlink the highest node that served no other word
			let cut = self.cut_depth(word);
			if let Some(parent) = self.node_mut(&word[..cut]) {
				parent.children.remove(&word[cut]);
			}
		} else if let Some(target) = self.node_mut(word) {
			target.terminal = false;
		}

		self.len -= 1;
		log::debug!("removed a word, {} left", self.len);
		Ok(true)
	}

	/// Every stored word, in symbol order
	pub fn words(&self) -> Vec<Vec<S>> {
		let mut words = Vec::with_capacity(self.len);
		self.root.collect_words(&mut Vec::new(), &mut words);
		words
	}

	/// Node at the end of `path`, if the tree has one
	fn node(&self, path: &[S]) -> Option<&TrieNode<S>> {
		let mut current = &self.root;
		for symbol in path {
			current = current.children.get(symbol)?;
		}
		Some(current)
	}

	/// Mutable counterpart of [`Self::node`]
	fn node_mut(&mut self, path: &[S]) -> Option<&mut TrieNode<S>> {
		let mut current = &mut self.root;
		for symbol in path {
			current = current.children.get_mut(symbol)?;
		}
		Some(current)
	}

	/// Length of the longest prefix of `word` already present in the tree
	fn shared_depth(&self, word: &[S]) -> usize {
		let mut current = &self.root;
		for (depth, symbol) in word.iter().enumerate() {
			match current.children.get(symbol) {
				Some(next) => current = next,
				None => return depth,
			}
		}
		word.len()
	}

	/// Depth of the deepest node on the path of `word` that must survive its removal
	///
	/// That node is the root, a terminal node or a node with another child.
	/// The child at `word[depth]` and everything below it belong to `word` alone.
	fn cut_depth(&self, word: &[S]) -> usize {
		let mut cut = 0;
		let mut current = &self.root;
		for (depth, symbol) in word[..word.len() - 1].iter().enumerate() {
			let Some(next) = current.children.get(symbol) else {
				break;
			};
			current = next;
			if current.terminal || current.children.len() > 1 {
				cut = depth + 1;
			}
		}
		cut
	}
}
