//! Reusable form-file fixtures

/// A form that needs all four pipeline steps
pub const FORM_NEEDS_MIGRATION: &str = "\
import React, { useState } from 'react';
import { useNavigate } from 'react-router-dom';
import { useAuth } from '../../../context/AuthContext';

const CreateListing = () => {
  const navigate = useNavigate();
  const { user } = useAuth();
  const [photos, setPhotos] = useState([]);

  const handleImageUpload = (event) => {
    if (photos.length >= 5) {
      alert('En fazla 5 fotoğraf yükleyebilirsiniz.');
      return;
    }
  };

  const handleSubmit = async (event) => {
    event.preventDefault();
    if (!user) {
      alert('Lütfen tüm gerekli alanları doldurun.');
      return;
    }
    try {
      await saveListing();
      alert('İlanınız başarıyla oluşturuldu! Admin onayından sonra yayınlanacaktır.');
      navigate('/');
    } catch (error) {
      alert(error.response?.data?.message || 'Bir hata oluştu.');
    }
  };

  return <form onSubmit={handleSubmit} />;
};

export default CreateListing;
";

/// A form that has already been migrated; running the tool again must not
/// touch it
pub const FORM_MIGRATED: &str = "\
import React from 'react';
import { useConfirmDialog } from '../../../hooks/useConfirmDialog';
import { useAuth } from '../../../context/AuthContext';

const EditListing = () => {
  const { user } = useAuth();
  const { confirm } = useConfirmDialog();

  const handleImageUpload = async (event) => {
    await confirm({ title: 'Bilgi', description: 'Yükleme tamamlandı.', severity: 'info' });
  };

  return <form />;
};

export default EditListing;
";

/// A component with neither target calls nor insertion anchors
pub const FORM_UNRELATED: &str = "\
import { useState } from 'react';

const Badge = () => {
  const [count] = useState(0);
  return <span>{count}</span>;
};

export default Badge;
";

/// Only the photo-limit alert, for rule-order tests
pub const FORM_PHOTO_LIMIT_ONLY: &str = "\
import { useAuth } from '../../../context/AuthContext';

const Uploader = () => {
  const { user } = useAuth();

  const handleImageUpload = (event) => {
    alert('En fazla 5 fotoğraf yükleyebilirsiniz.');
  };

  return <input onChange={handleImageUpload} />;
};

export default Uploader;
";
