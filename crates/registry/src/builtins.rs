//! Default aliases seeded by the shipped host.

use crate::entry::{AliasEntry, TypeName};

/// `(alias, type)` pairs registered at startup unless the host opts out.
///
/// Several aliases share a target (`float`/`single`, `int`/`int32`) so reverse
/// lookup can return more than one name.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
	("array", "System.Array"),
	("bigint", "System.Numerics.BigInteger"),
	("bool", "System.Boolean"),
	("byte", "System.Byte"),
	("char", "System.Char"),
	("datetime", "System.DateTime"),
	("decimal", "System.Decimal"),
	("double", "System.Double"),
	("float", "System.Single"),
	("guid", "System.Guid"),
	("hashtable", "System.Collections.Hashtable"),
	("int", "System.Int32"),
	("int16", "System.Int16"),
	("int32", "System.Int32"),
	("int64", "System.Int64"),
	("ipaddress", "System.Net.IPAddress"),
	("long", "System.Int64"),
	("object", "System.Object"),
	("regex", "System.Text.RegularExpressions.Regex"),
	("sbyte", "System.SByte"),
	("scriptblock", "System.Management.Automation.ScriptBlock"),
	("short", "System.Int16"),
	("single", "System.Single"),
	("string", "System.String"),
	("switch", "System.Management.Automation.SwitchParameter"),
	("timespan", "System.TimeSpan"),
	("type", "System.Type"),
	("uint", "System.UInt32"),
	("uint16", "System.UInt16"),
	("uint32", "System.UInt32"),
	("uint64", "System.UInt64"),
	("ulong", "System.UInt64"),
	("uri", "System.Uri"),
	("ushort", "System.UInt16"),
	("version", "System.Version"),
	("void", "System.Void"),
	("xml", "System.Xml.XmlDocument"),
];

/// Returns the builtin seed set in declaration order.
pub fn builtin_aliases() -> impl Iterator<Item = AliasEntry<TypeName>> {
	BUILTIN_ALIASES.iter().filter_map(|(name, ty)| {
		let ty = TypeName::parse(ty).ok()?;
		Some(AliasEntry::new(*name, ty))
	})
}
